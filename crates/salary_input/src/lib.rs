//! # Salary Input
//!
//! Parsing and validation of user-typed money amounts.
//!
//! Salary fields accept free-form text mixing Brazilian formatting
//! (`7.855,77`), international formatting (`7,855.77`) and bare
//! comma-decimal input (`7855,77`). The disambiguation lives in a single
//! pure function, [`parse_salary`], so its edge cases are pinned by the
//! test vector table below rather than spread across callers.
//!
//! Parsing is deliberately total: empty, unparsable or negative input
//! yields `0.0`. Callers that need a user-facing rejection go through
//! [`validate_salary`] instead.

use thiserror::Error;

/// Validation failures for a salary field, with display text suitable for
/// showing next to the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalaryError {
    #[error("salary is required")]
    Empty,
    #[error("enter a valid salary amount")]
    Invalid,
    #[error("salary must be at least {minimum:.2}")]
    BelowMinimum { minimum: f64 },
}

/// Parses a localized salary string into a non-negative amount.
///
/// Currency symbol characters (`R`, `$`) and whitespace are stripped first.
/// When both `.` and `,` appear, the rightmost of the two is the decimal
/// separator and the other is removed as a grouping character. A comma with
/// no dot is a decimal comma. Dot-only input is parsed as-is, so `"7.855"`
/// reads as 7.855 and not 7855.
///
/// Returns `0.0` for empty, unparsable or negative input.
pub fn parse_salary(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, 'R' | 'r' | '$') && !c.is_whitespace())
        .collect();

    let last_comma = cleaned.rfind(',');
    let last_dot = cleaned.rfind('.');

    let normalized = match (last_comma, last_dot) {
        // Brazilian format: 7.855,77
        (Some(comma), Some(dot)) if comma > dot => {
            cleaned.replace('.', "").replace(',', ".")
        }
        // International format: 7,855.77
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        // Only comma, treat it as the decimal separator: 7855,77
        (Some(_), None) => cleaned.replace(',', "."),
        // Only dots or no separators at all
        _ => cleaned,
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Parses a user-edited category amount. Same heuristic as [`parse_salary`].
pub fn parse_field_amount(raw: &str) -> f64 {
    parse_salary(raw)
}

/// Parses a percentage string (slider or text input), accepting a decimal
/// comma, and clamps the result to `[0, 100]`.
pub fn parse_percentage(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let value = cleaned.replace(',', ".").parse::<f64>().unwrap_or(0.0);
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Validates a raw salary string against the configured minimum.
///
/// On success returns the parsed amount. The minimum itself comes from
/// settings; a zero minimum disables the floor check.
pub fn validate_salary(raw: &str, minimum: f64) -> Result<f64, SalaryError> {
    if raw.trim().is_empty() {
        return Err(SalaryError::Empty);
    }
    let amount = parse_salary(raw);
    if amount <= 0.0 {
        return Err(SalaryError::Invalid);
    }
    if amount < minimum {
        return Err(SalaryError::BelowMinimum { minimum });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary_vectors() {
        // (input, expected)
        let vectors: &[(&str, f64)] = &[
            ("1.234,56", 1234.56),
            ("1,234.56", 1234.56),
            ("1234,56", 1234.56),
            ("7.855,77", 7855.77),
            ("R$ 7.855,77", 7855.77),
            ("R$5000", 5000.0),
            ("1518", 1518.0),
            ("0,5", 0.5),
            ("1.234.567,89", 1234567.89),
            ("1,234,567.89", 1234567.89),
            // dot-only input is a decimal point, not grouping
            ("7.855", 7.855),
            ("", 0.0),
            ("   ", 0.0),
            ("abc", 0.0),
            ("-100", 0.0),
            ("-1.234,56", 0.0),
        ];
        for (input, expected) in vectors {
            let got = parse_salary(input);
            assert!(
                (got - expected).abs() < 1e-9,
                "parse_salary({:?}) = {}, expected {}",
                input,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_parse_field_amount_matches_salary_heuristic() {
        assert_eq!(parse_field_amount("1.500,00"), 1500.0);
        assert_eq!(parse_field_amount("1,500.00"), 1500.0);
        assert_eq!(parse_field_amount("garbage"), 0.0);
    }

    #[test]
    fn test_parse_percentage_clamps_and_accepts_comma() {
        assert_eq!(parse_percentage("50"), 50.0);
        assert_eq!(parse_percentage("12,5"), 12.5);
        assert_eq!(parse_percentage("12.5%"), 12.5);
        assert_eq!(parse_percentage("150"), 100.0);
        assert_eq!(parse_percentage("-10"), 0.0);
        assert_eq!(parse_percentage("junk"), 0.0);
    }

    #[test]
    fn test_validate_salary_taxonomy() {
        assert_eq!(validate_salary("", 1518.0), Err(SalaryError::Empty));
        assert_eq!(validate_salary("abc", 1518.0), Err(SalaryError::Invalid));
        assert_eq!(validate_salary("-50", 1518.0), Err(SalaryError::Invalid));
        assert_eq!(
            validate_salary("1000", 1518.0),
            Err(SalaryError::BelowMinimum { minimum: 1518.0 })
        );
        assert_eq!(validate_salary("1518", 1518.0), Ok(1518.0));
        assert_eq!(validate_salary("5.000,00", 1518.0), Ok(5000.0));
    }

    #[test]
    fn test_validate_salary_zero_minimum_disables_floor() {
        assert_eq!(validate_salary("1", 0.0), Ok(1.0));
    }

    #[test]
    fn test_below_minimum_message_carries_threshold() {
        let err = validate_salary("100", 1518.0).unwrap_err();
        assert_eq!(err.to_string(), "salary must be at least 1518.00");
    }
}
