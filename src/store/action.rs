//! Store actions
//!
//! The closed set of transitions the budget store understands. Every state
//! change in the application is one of these, dispatched through
//! `BudgetProvider::dispatch`.

use std::fmt;

use crate::models::{DraftExpense, Expense, ExpenseId, Money};

/// A request to transition the budget state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetAction {
    /// Append a new expense; the store assigns its id
    AddExpense { expense: DraftExpense },

    /// Remove an expense (no-op when the id is unknown)
    RemoveExpense { id: ExpenseId },

    /// Enter the editing configuration for an existing expense
    GetExpenseById { id: ExpenseId },

    /// Replace the expense with the same id and leave editing
    UpdateExpense { expense: Expense },

    /// Leave editing without changing any expense
    CancelEdit,

    /// Set the spending ceiling
    SetBudget { budget: Money },

    /// Filter the expense list to one category, or clear the filter
    FilterCategory { category: Option<String> },

    /// Return to the initial empty state
    ResetApp,
}

impl BudgetAction {
    /// Short kebab-case name of the action, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddExpense { .. } => "add-expense",
            Self::RemoveExpense { .. } => "remove-expense",
            Self::GetExpenseById { .. } => "get-expense-by-id",
            Self::UpdateExpense { .. } => "update-expense",
            Self::CancelEdit => "cancel-edit",
            Self::SetBudget { .. } => "set-budget",
            Self::FilterCategory { .. } => "filter-category",
            Self::ResetApp => "reset-app",
        }
    }
}

impl fmt::Display for BudgetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
