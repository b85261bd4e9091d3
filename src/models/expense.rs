//! Expense model
//!
//! An [`Expense`] is a committed record with a stable id. A [`DraftExpense`]
//! is the same record before the store has assigned an id, used while the
//! form composes a new expense or edits an existing one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::category_name;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store on add
    pub id: ExpenseId,

    /// What the money was spent on
    pub expense_name: String,

    /// Amount spent (always positive once committed)
    pub amount: Money,

    /// Category id from the fixed lookup table
    pub category: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl Expense {
    /// Attach an id to a draft
    pub fn from_draft(id: ExpenseId, draft: DraftExpense) -> Self {
        Self {
            id,
            expense_name: draft.expense_name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Copy the editable fields into a draft
    pub fn to_draft(&self) -> DraftExpense {
        DraftExpense {
            expense_name: self.expense_name.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.expense_name,
            category_name(&self.category),
            self.amount
        )
    }
}

/// An expense that has not been committed to the store yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftExpense {
    pub expense_name: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl DraftExpense {
    /// Create a draft with every field filled in
    pub fn new(
        expense_name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            expense_name: expense_name.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// An empty draft dated `date`, what the form shows before any input
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            expense_name: String::new(),
            amount: Money::zero(),
            category: String::new(),
            date,
        }
    }

    /// Name of the first required field that is empty or zero, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.expense_name.trim().is_empty() {
            Some("name")
        } else if self.amount.is_zero() {
            Some("amount")
        } else if self.category.trim().is_empty() {
            Some("category")
        } else {
            None
        }
    }
}
