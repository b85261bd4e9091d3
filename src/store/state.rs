//! Budget state
//!
//! The whole application state held by the store. Consumers only ever see it
//! through a shared reference; every change goes through the reducer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Expense, ExpenseId, Money};

/// Budget, recorded expenses and the current edit selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// Spending ceiling set by the user
    pub budget: Money,

    /// Expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Expense currently being edited, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_id: Option<ExpenseId>,

    /// Category the expense list is filtered to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
}

impl BudgetState {
    /// Fresh session state with the given budget
    pub fn with_budget(budget: Money) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Whether an expense with this id exists
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.expenses.iter().any(|e| e.id == id)
    }

    /// True in the editing configuration
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// The expense being edited, if the edit selection is valid
    pub fn editing_expense(&self) -> Option<&Expense> {
        self.editing_id.and_then(|id| self.expense(id))
    }

    /// Expenses matching the category filter, in insertion order
    pub fn visible_expenses(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| match &self.current_category {
            Some(category) => &e.category == category,
            None => true,
        })
    }

    /// Verify the structural invariants of the state
    ///
    /// A violation means a caller bypassed the store or fed it a corrupt
    /// snapshot; the reducer itself never produces one.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.expenses.len());
        for expense in &self.expenses {
            if !seen.insert(expense.id) {
                return Err(InvariantViolation::DuplicateId(expense.id));
            }
        }

        if let Some(id) = self.editing_id {
            if !seen.contains(&id) {
                return Err(InvariantViolation::OrphanedEditingId(id));
            }
        }

        Ok(())
    }
}

/// A broken structural invariant of [`BudgetState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("duplicate expense id {0}")]
    DuplicateId(ExpenseId),

    #[error("editing id {0} does not reference an existing expense")]
    OrphanedEditingId(ExpenseId),
}
