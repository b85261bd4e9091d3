//! Custom error types for the budget tracker
//!
//! This module defines the application-level error hierarchy using thiserror.
//! Form validation failures have their own type in `workflow::validation`
//! and never reach the store.

use thiserror::Error;

use crate::workflow::FormError;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors surfaced by the expense form
    #[error("Validation error: {0}")]
    Validation(#[from] FormError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Identifier matched more than one entity
    #[error("{entity_type} identifier is ambiguous: {identifier}")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
    },

    /// Session snapshot errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// An update was requested while no expense is being edited
    #[error("No expense is being edited. Run 'budget expense edit <id>' first")]
    NotEditing,

    /// A new expense was requested while another one is being edited
    #[error("Expense {0} is being edited. Update or cancel the edit first")]
    EditInProgress(String),

    /// No session has been started yet
    #[error("No budget session found. Run 'budget init --budget <amount>' first")]
    NoSession,
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
