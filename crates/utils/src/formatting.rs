//! Localized number output: `R$ 1.234,56` style currency strings, the plain
//! grouped text used by editable value inputs, and percent strings.

/// Rounds to 2 decimal places (half-up for positive amounts).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Rounds to 4 decimal places.
pub fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}

/// Formats an amount as localized currency: dot for thousands grouping,
/// comma for decimals, two fraction digits.
///
/// NaN and non-finite input format as zero, matching the calculator's
/// "never surface arithmetic garbage" contract.
///
/// # Example
/// ```
/// use utils::format_currency;
/// assert_eq!(format_currency(1234.56, "R$"), "R$ 1.234,56");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{} {}", symbol, format_value_for_input(amount))
}

/// Formats an amount the way the editable category inputs display it:
/// grouped, comma-decimal, two digits, no currency symbol.
pub fn format_value_for_input(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, frac)
}

/// Formats a digits-only input mask value as currency: the raw digits are
/// read as cents ("123456" -> 1234.56). Empty input stays empty.
pub fn format_currency_input(raw: &str, symbol: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    let cents = digits.parse::<u64>().unwrap_or(0);
    format_currency(cents as f64 / 100.0, symbol)
}

/// Formats a ratio in [0, 1] as percent text with one decimal, the
/// precision the percentage sliders step by.
pub fn format_percentage(ratio: f64) -> String {
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };
    format!("{:.1}", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_brazilian_style() {
        assert_eq!(format_currency(1234.56, "R$"), "R$ 1.234,56");
        assert_eq!(format_currency(5000.0, "R$"), "R$ 5.000,00");
        assert_eq!(format_currency(0.0, "R$"), "R$ 0,00");
        assert_eq!(format_currency(1_234_567.89, "R$"), "R$ 1.234.567,89");
        assert_eq!(format_currency(999.999, "R$"), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, "R$"), "R$ 0,00");
        assert_eq!(format_currency(f64::INFINITY, "R$"), "R$ 0,00");
    }

    #[test]
    fn test_format_value_for_input() {
        assert_eq!(format_value_for_input(1500.0), "1.500,00");
        assert_eq!(format_value_for_input(0.5), "0,50");
        assert_eq!(format_value_for_input(12.345), "12,35");
        assert_eq!(format_value_for_input(-42.0), "-42,00");
    }

    #[test]
    fn test_rounding_half_up_at_second_decimal() {
        assert_eq!(round2(1.005000001), 1.01);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round4(0.123456), 0.1235);
    }

    #[test]
    fn test_format_currency_input_reads_digits_as_cents() {
        assert_eq!(format_currency_input("123456", "R$"), "R$ 1.234,56");
        assert_eq!(format_currency_input("R$ 1a2b3", "R$"), "R$ 1,23");
        assert_eq!(format_currency_input("", "R$"), "");
        assert_eq!(format_currency_input("abc", "R$"), "");
    }

    #[test]
    fn test_format_percentage_one_decimal() {
        assert_eq!(format_percentage(0.25), "25.0");
        assert_eq!(format_percentage(0.333), "33.3");
        assert_eq!(format_percentage(1.0), "100.0");
        assert_eq!(format_percentage(f64::NAN), "0.0");
    }
}
