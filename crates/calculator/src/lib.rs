//! The stateful calculator session sitting between the input surface and
//! the pure allocation math.
//!
//! A [`CalculatorSession`] owns the salary, the engine state and the derived
//! display strings; UI collaborators only submit raw input strings and read
//! formatted output back. All allocation math happens in the
//! `allocation_engine` crate; nothing here re-derives it.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use allocation_engine::{
    Redistribution, current_result, seed_state, set_category_percentage, set_category_value,
};
use models::{AllocationResult, Category, CategoryShares, EngineState, Settings};
use salary_input::{SalaryError, parse_field_amount, parse_percentage, validate_salary};
use utils::{format_currency, format_percentage, format_value_for_input};

/// One display string per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStrings {
    pub investments: String,
    pub fixed_costs: String,
    pub goals: String,
    pub comfort: String,
    pub entertainment: String,
    pub studies: String,
}

impl CategoryStrings {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Investments => &self.investments,
            Category::FixedCosts => &self.fixed_costs,
            Category::Goals => &self.goals,
            Category::Comfort => &self.comfort,
            Category::Entertainment => &self.entertainment,
            Category::Studies => &self.studies,
        }
    }

    fn set(&mut self, category: Category, value: String) {
        match category {
            Category::Investments => self.investments = value,
            Category::FixedCosts => self.fixed_costs = value,
            Category::Goals => self.goals = value,
            Category::Comfort => self.comfort = value,
            Category::Entertainment => self.entertainment = value,
            Category::Studies => self.studies = value,
        }
    }
}

pub struct CalculatorSession {
    settings: Settings,
    salary: f64,
    state: EngineState,
    result: Option<AllocationResult>,
    salary_error: Option<SalaryError>,
    percentage_strings: CategoryStrings,
}

impl CalculatorSession {
    pub fn new(settings: Settings) -> Self {
        let shares = settings
            .default_distribution
            .unwrap_or_default();
        let mut session = CalculatorSession {
            settings,
            salary: 0.0,
            state: EngineState {
                shares,
                values: Default::default(),
            },
            result: None,
            salary_error: None,
            percentage_strings: CategoryStrings::default(),
        };
        session.refresh_percentage_strings();
        session
    }

    /// Builds a session from an optional settings file, falling back to
    /// `settings.json` in the working directory, then to built-in defaults.
    pub fn from_optional_settings(path: Option<&PathBuf>) -> Result<Self> {
        let settings = settings_loader::load_settings_with_fallback(path)?.unwrap_or_default();
        Ok(CalculatorSession::new(settings))
    }

    /// Entry point: parses and validates the raw salary, then seeds the
    /// engine state from the current distribution. On any validation
    /// failure the result is cleared and the error kept for display.
    pub fn calculate(&mut self, raw_salary: &str) {
        match validate_salary(raw_salary, self.settings.minimum_salary) {
            Ok(amount) => {
                self.salary = amount;
                self.state = seed_state(amount, self.state.shares);
                self.result = Some(current_result(amount, &self.state));
                self.salary_error = None;
                self.refresh_percentage_strings();
                debug!(salary = amount, "calculated allocation");
            }
            Err(err) => {
                self.salary = 0.0;
                self.result = None;
                self.salary_error = Some(err);
            }
        }
    }

    /// Sets one category's absolute amount from a raw input string and
    /// reconciles the other five. No-op until a salary has been calculated.
    pub fn update_field_value(&mut self, category: Category, raw_amount: &str) {
        if self.result.is_none() {
            return;
        }
        let amount = parse_field_amount(raw_amount);
        let outcome = set_category_value(category, amount, self.salary, &mut self.state);
        if outcome == Redistribution::OthersAllZero {
            warn!(
                category = category.as_str(),
                "all other categories are zero; remainder left undistributed"
            );
        }
        self.refresh_from_values();
        debug!(category = category.as_str(), amount, "updated category value");
    }

    /// Sets one category's percentage from a raw input string (clamped to
    /// [0, 100]) and shrinks the others when the total would pass 100%.
    pub fn update_field_percentage(&mut self, category: Category, raw_percentage: &str) {
        if self.result.is_none() {
            return;
        }
        let percentage = parse_percentage(raw_percentage);
        set_category_percentage(category, percentage, self.salary, &mut self.state);
        self.result = Some(current_result(self.salary, &self.state));
        self.refresh_percentage_strings();
        debug!(
            category = category.as_str(),
            percentage, "updated category percentage"
        );
    }

    pub fn result(&self) -> Option<&AllocationResult> {
        self.result.as_ref()
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn salary_error(&self) -> Option<&SalaryError> {
        self.salary_error.as_ref()
    }

    pub fn minimum_salary(&self) -> f64 {
        self.settings.minimum_salary
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency.symbol
    }

    /// One-decimal percent text per category, as the sliders render it.
    pub fn percentage_strings(&self) -> &CategoryStrings {
        &self.percentage_strings
    }

    /// Grouped two-decimal amount text per category, as the editable value
    /// inputs render it.
    pub fn editable_values(&self) -> CategoryStrings {
        let mut strings = CategoryStrings::default();
        for category in Category::ALL {
            strings.set(category, format_value_for_input(self.state.values.get(category)));
        }
        strings
    }

    /// Locale-formatted currency using the configured symbol.
    pub fn format_currency(&self, amount: f64) -> String {
        format_currency(amount, &self.settings.currency.symbol)
    }

    pub fn shares(&self) -> &CategoryShares {
        &self.state.shares
    }

    // Result derived from the mutated values directly, so the displayed
    // amounts are exactly what the redistribution produced.
    fn refresh_from_values(&mut self) {
        let total_allocated = self.state.values.sum();
        self.result = Some(AllocationResult {
            amounts: self.state.values,
            total_allocated,
            remaining: self.salary - total_allocated,
        });
        self.refresh_percentage_strings();
    }

    fn refresh_percentage_strings(&mut self) {
        for category in Category::ALL {
            self.percentage_strings
                .set(category, format_percentage(self.state.shares.get(category)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CalculatorSession {
        CalculatorSession::new(Settings::default())
    }

    fn assert_close(got: f64, expected: f64) {
        assert!(
            (got - expected).abs() < 1e-9,
            "got {}, expected {}",
            got,
            expected
        );
    }

    #[test]
    fn test_calculate_seeds_default_split() {
        let mut s = session();
        s.calculate("5.000,00");
        let result = s.result().expect("result populated");
        assert_close(result.amounts.investments, 1250.0);
        assert_close(result.amounts.fixed_costs, 1500.0);
        assert_close(result.total_allocated, 5000.0);
        assert_close(result.remaining, 0.0);
        assert_eq!(s.percentage_strings().get(Category::Investments), "25.0");
        assert_eq!(s.editable_values().get(Category::FixedCosts), "1.500,00");
        assert!(s.salary_error().is_none());
    }

    #[test]
    fn test_below_minimum_salary_clears_result() {
        let mut s = session();
        s.calculate("5000");
        assert!(s.result().is_some());
        s.calculate("1000");
        assert!(s.result().is_none());
        assert_eq!(
            s.salary_error(),
            Some(&SalaryError::BelowMinimum { minimum: 1518.0 })
        );
    }

    #[test]
    fn test_invalid_salary_clears_result() {
        let mut s = session();
        s.calculate("abc");
        assert!(s.result().is_none());
        assert_eq!(s.salary_error(), Some(&SalaryError::Invalid));
        s.calculate("");
        assert_eq!(s.salary_error(), Some(&SalaryError::Empty));
    }

    #[test]
    fn test_update_percentage_flows_through() {
        let mut s = session();
        s.calculate("5000");
        s.update_field_percentage(Category::Investments, "50");
        let result = s.result().unwrap();
        assert_close(result.amounts.investments, 2500.0);
        assert_close(result.total_allocated, 5000.0);
        assert_close(result.remaining, 0.0);
        assert_eq!(s.percentage_strings().get(Category::Investments), "50.0");
    }

    #[test]
    fn test_update_value_keeps_percentages_consistent() {
        let mut s = session();
        s.calculate("5000");
        s.update_field_value(Category::Investments, "2.000,00");
        let result = s.result().unwrap();
        assert_close(result.amounts.investments, 2000.0);
        assert_close(result.total_allocated, 5000.0);
        assert_eq!(s.percentage_strings().get(Category::Investments), "40.0");
    }

    #[test]
    fn test_updates_are_no_ops_before_calculate() {
        let mut s = session();
        s.update_field_value(Category::Goals, "100");
        s.update_field_percentage(Category::Goals, "50");
        assert!(s.result().is_none());
        // Seed distribution untouched
        assert_close(s.shares().goals, 0.15);
    }

    #[test]
    fn test_custom_settings_distribution_and_symbol() {
        let settings = Settings {
            default_distribution: Some(CategoryShares {
                investments: 0.5,
                fixed_costs: 0.5,
                goals: 0.0,
                comfort: 0.0,
                entertainment: 0.0,
                studies: 0.0,
            }),
            ..Settings::default()
        };
        let mut s = CalculatorSession::new(settings);
        s.calculate("2000");
        let result = s.result().unwrap();
        assert_close(result.amounts.investments, 1000.0);
        assert_close(result.amounts.goals, 0.0);
        assert_eq!(s.format_currency(1000.0), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_uses_configured_symbol() {
        let settings = Settings {
            currency: models::CurrencySettings { symbol: "BRL".to_string() },
            ..Settings::default()
        };
        let s = CalculatorSession::new(settings);
        assert_eq!(s.format_currency(12.3), "BRL 12,30");
    }
}
