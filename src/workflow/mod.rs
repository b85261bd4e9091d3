//! Expense form workflow
//!
//! The boundary between raw user input and the store: parsing, validation
//! against the remaining budget, and dispatch.

pub mod form;
pub mod validation;

pub use form::{ExpenseForm, RawExpenseInput, Submission};
pub use validation::{validate_submission, FormError, DATE_FORMAT};
