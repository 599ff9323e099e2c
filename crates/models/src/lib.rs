
use serde::{Deserialize, Serialize};

/// The six fixed allocation buckets. The set is closed: every operation in
/// the engine matches exhaustively over these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
	Investments,
	FixedCosts,
	Goals,
	Comfort,
	Entertainment,
	Studies,
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::Investments,
		Category::FixedCosts,
		Category::Goals,
		Category::Comfort,
		Category::Entertainment,
		Category::Studies,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Investments => "investments",
			Category::FixedCosts => "fixedCosts",
			Category::Goals => "goals",
			Category::Comfort => "comfort",
			Category::Entertainment => "entertainment",
			Category::Studies => "studies",
		}
	}

	/// Case-insensitive lookup accepting both camelCase and kebab/snake
	/// spellings ("fixedCosts", "fixed-costs", "fixed_costs").
	pub fn parse(s: &str) -> Option<Category> {
		let norm: String = s
			.chars()
			.filter(|c| c.is_ascii_alphanumeric())
			.collect::<String>()
			.to_ascii_lowercase();
		match norm.as_str() {
			"investments" => Some(Category::Investments),
			"fixedcosts" => Some(Category::FixedCosts),
			"goals" => Some(Category::Goals),
			"comfort" => Some(Category::Comfort),
			"entertainment" => Some(Category::Entertainment),
			"studies" => Some(Category::Studies),
			_ => None,
		}
	}
}

/// One f64 per category, in currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmounts {
	pub investments: f64,
	pub fixed_costs: f64,
	pub goals: f64,
	pub comfort: f64,
	pub entertainment: f64,
	pub studies: f64,
}

impl CategoryAmounts {
	pub fn get(&self, category: Category) -> f64 {
		match category {
			Category::Investments => self.investments,
			Category::FixedCosts => self.fixed_costs,
			Category::Goals => self.goals,
			Category::Comfort => self.comfort,
			Category::Entertainment => self.entertainment,
			Category::Studies => self.studies,
		}
	}

	pub fn set(&mut self, category: Category, value: f64) {
		match category {
			Category::Investments => self.investments = value,
			Category::FixedCosts => self.fixed_costs = value,
			Category::Goals => self.goals = value,
			Category::Comfort => self.comfort = value,
			Category::Entertainment => self.entertainment = value,
			Category::Studies => self.studies = value,
		}
	}

	pub fn sum(&self) -> f64 {
		Category::ALL.iter().map(|c| self.get(*c)).sum()
	}
}

/// One ratio in [0, 1] per category; the distribution of the salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShares {
	pub investments: f64,
	pub fixed_costs: f64,
	pub goals: f64,
	pub comfort: f64,
	pub entertainment: f64,
	pub studies: f64,
}

impl CategoryShares {
	pub fn get(&self, category: Category) -> f64 {
		match category {
			Category::Investments => self.investments,
			Category::FixedCosts => self.fixed_costs,
			Category::Goals => self.goals,
			Category::Comfort => self.comfort,
			Category::Entertainment => self.entertainment,
			Category::Studies => self.studies,
		}
	}

	pub fn set(&mut self, category: Category, share: f64) {
		match category {
			Category::Investments => self.investments = share,
			Category::FixedCosts => self.fixed_costs = share,
			Category::Goals => self.goals = share,
			Category::Comfort => self.comfort = share,
			Category::Entertainment => self.entertainment = share,
			Category::Studies => self.studies = share,
		}
	}

	pub fn sum(&self) -> f64 {
		Category::ALL.iter().map(|c| self.get(*c)).sum()
	}
}

/// The 25/30/15/15/10/5 split the calculator starts from.
impl Default for CategoryShares {
	fn default() -> Self {
		CategoryShares {
			investments: 0.25,
			fixed_costs: 0.30,
			goals: 0.15,
			comfort: 0.15,
			entertainment: 0.10,
			studies: 0.05,
		}
	}
}

/// Derived allocation for a given salary and distribution.
/// Invariant: total_allocated + remaining == salary (float tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
	pub amounts: CategoryAmounts,
	pub total_allocated: f64,
	pub remaining: f64,
}

/// Mutable engine state threaded through the reconciliation operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
	pub shares: CategoryShares,
	pub values: CategoryAmounts,
}

// Settings file models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySettings {
	pub symbol: String,
}

impl Default for CurrencySettings {
	fn default() -> Self {
		CurrencySettings { symbol: "R$".to_string() }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
	pub settings_version: u32,
	#[serde(default)]
	pub currency: CurrencySettings,
	#[serde(default = "default_minimum_salary")]
	pub minimum_salary: f64,
	#[serde(default)]
	pub default_distribution: Option<CategoryShares>,
}

// Brazilian minimum wage, 2025.
fn default_minimum_salary() -> f64 {
	1518.0
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			settings_version: 1,
			currency: CurrencySettings::default(),
			minimum_salary: default_minimum_salary(),
			default_distribution: None,
		}
	}
}
