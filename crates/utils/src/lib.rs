pub mod formatting;

// Re-export commonly used items
pub use crate::formatting::{
    format_currency, format_currency_input, format_percentage, format_value_for_input, round2,
    round4,
};
