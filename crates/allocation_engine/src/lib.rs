//! Pure reconciliation math for the salary split.
//!
//! The engine keeps three quantities mutually consistent: the salary, the
//! per-category ratios and the per-category absolute values. Editing one
//! category (by value or by percentage) redistributes the difference across
//! the other five in proportion to what they already hold, so the invariants
//! `sum(ratios) <= 1` and `sum(values) == salary` survive any sequence of
//! edits, up to float precision.
//!
//! Every operation here is a total function over in-memory state: no I/O,
//! no errors, O(1) over the six fixed categories.

use models::{AllocationResult, Category, CategoryAmounts, CategoryShares, EngineState};

/// Absolute tolerance for "the remainder is zero" and the sum invariants.
pub const EPSILON: f64 = 1e-9;

/// Outcome flag for the degenerate redistribution edge case. When the five
/// untouched categories are all zero there is nothing to scale against and
/// the remainder is knowingly left undistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redistribution {
    Applied,
    NothingToDo,
    /// Remainder left in place; `sum(values) == salary` does not hold.
    OthersAllZero,
}

/// Multiplies the salary through the distribution. Pure; no rounding.
pub fn compute_distribution(salary: f64, shares: &CategoryShares) -> AllocationResult {
    let mut amounts = CategoryAmounts::default();
    for category in Category::ALL {
        amounts.set(category, salary * shares.get(category));
    }
    let total_allocated = amounts.sum();
    AllocationResult {
        amounts,
        total_allocated,
        remaining: salary - total_allocated,
    }
}

/// Seeds engine state for a freshly calculated salary: values are derived
/// from the distribution, ratios are kept as-is.
pub fn seed_state(salary: f64, shares: CategoryShares) -> EngineState {
    let result = compute_distribution(salary, &shares);
    EngineState {
        shares,
        values: result.amounts,
    }
}

/// Sets one category's absolute value and reconciles the rest.
///
/// The difference between the salary and the new total is spread across the
/// other five categories in proportion to their current values; percentages
/// are then re-derived from the values. No-op when `salary <= 0`.
pub fn set_category_value(
    field: Category,
    new_value: f64,
    salary: f64,
    state: &mut EngineState,
) -> Redistribution {
    if salary <= 0.0 {
        return Redistribution::NothingToDo;
    }

    state.values.set(field, new_value);

    let remainder = salary - state.values.sum();
    let outcome = if remainder.abs() <= EPSILON {
        Redistribution::NothingToDo
    } else {
        let others_total: f64 = Category::ALL
            .iter()
            .filter(|c| **c != field)
            .map(|c| state.values.get(*c))
            .sum();
        if others_total <= 0.0 {
            // Nothing to scale against; the invariant total == salary is
            // intentionally left broken here rather than inventing shares.
            Redistribution::OthersAllZero
        } else {
            for category in Category::ALL {
                if category == field {
                    continue;
                }
                let current = state.values.get(category);
                state
                    .values
                    .set(category, current + remainder * (current / others_total));
            }
            Redistribution::Applied
        }
    };

    // Percentages follow the values, including the degenerate case.
    for category in Category::ALL {
        state
            .shares
            .set(category, state.values.get(category) / salary);
    }

    outcome
}

/// Sets one category's percentage (clamped to [0, 100]) and shrinks the
/// other five proportionally when the total would exceed 100%.
///
/// Under-allocation is allowed: a total below 100% is left alone and shows
/// up as positive `remaining`. Values are refreshed only when `salary > 0`.
pub fn set_category_percentage(
    field: Category,
    new_percentage: f64,
    salary: f64,
    state: &mut EngineState,
) -> Redistribution {
    let ratio = new_percentage.clamp(0.0, 100.0) / 100.0;
    state.shares.set(field, ratio);

    let total = state.shares.sum();
    let outcome = if total > 1.0 + EPSILON {
        let others_total: f64 = Category::ALL
            .iter()
            .filter(|c| **c != field)
            .map(|c| state.shares.get(*c))
            .sum();
        if others_total <= 0.0 {
            Redistribution::OthersAllZero
        } else {
            let scale = (1.0 - ratio) / others_total;
            for category in Category::ALL {
                if category == field {
                    continue;
                }
                let current = state.shares.get(category);
                state.shares.set(category, current * scale);
            }
            Redistribution::Applied
        }
    } else {
        Redistribution::NothingToDo
    };

    if salary > 0.0 {
        let result = compute_distribution(salary, &state.shares);
        state.values = result.amounts;
    }

    outcome
}

/// Convenience: the result corresponding to the current state.
pub fn current_result(salary: f64, state: &EngineState) -> AllocationResult {
    compute_distribution(salary, &state.shares)
}
