//! Derived metrics
//!
//! Values computed from a [`BudgetState`] and never stored. They are
//! recomputed in full on every read so they can never go stale.

use serde::Serialize;

use crate::models::Money;

use super::state::BudgetState;

/// Totals derived from the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetMetrics {
    /// Sum of every expense amount
    pub total_expenses: Money,

    /// Budget minus total expenses; negative when overspent
    pub remaining_budget: Money,
}

impl BudgetMetrics {
    /// Derive the metrics for `state`
    pub fn compute(state: &BudgetState) -> Self {
        let total_expenses = total_expenses(state);
        Self {
            total_expenses,
            remaining_budget: state.budget - total_expenses,
        }
    }

    /// Share of the budget already spent, in percent with two decimals
    ///
    /// Zero when no budget is set. Can exceed 100 when overspent.
    pub fn spent_percentage(&self, budget: Money) -> f64 {
        if budget.is_zero() {
            return 0.0;
        }
        let ratio = self.total_expenses.cents() as f64 / budget.cents() as f64;
        (ratio * 10_000.0).round() / 100.0
    }
}

/// Sum of all expense amounts
pub fn total_expenses(state: &BudgetState) -> Money {
    state.expenses.iter().map(|e| e.amount).sum()
}

/// Budget left after all expenses
pub fn remaining_budget(state: &BudgetState) -> Money {
    state.budget - total_expenses(state)
}
