//! Form validation
//!
//! Everything here runs before an action is dispatched. A failure means the
//! store is never touched.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{find_category, DraftExpense, Money, MoneyParseError};

/// Date format accepted from the user
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a draft expense was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required (missing {0})")]
    MissingField(&'static str),

    #[error(transparent)]
    Amount(#[from] MoneyParseError),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Amount exceeds the remaining budget: adds {increase}, only {remaining} left")]
    ExceedsRemainingBudget { increase: Money, remaining: Money },
}

/// Parse a user-typed amount
pub fn parse_amount(raw: &str) -> Result<Money, FormError> {
    Ok(Money::parse(raw)?)
}

/// Parse a user-typed `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(raw.trim().to_string()))
}

/// Resolve a category id against the fixed table, returning its canonical id
pub fn parse_category(raw: &str) -> Result<String, FormError> {
    find_category(raw)
        .map(|c| c.id.to_string())
        .ok_or_else(|| FormError::UnknownCategory(raw.trim().to_string()))
}

/// Check a draft before it is committed
///
/// `previous_amount` is the amount of the expense being replaced (zero for a
/// new expense). Only the increase over it has to fit in `remaining`, so an
/// edit may always keep or lower its amount.
pub fn validate_submission(
    draft: &DraftExpense,
    previous_amount: Money,
    remaining: Money,
) -> Result<(), FormError> {
    if let Some(field) = draft.missing_field() {
        return Err(FormError::MissingField(field));
    }

    let increase = draft.amount - previous_amount;
    if increase > remaining {
        return Err(FormError::ExceedsRemainingBudget { increase, remaining });
    }

    Ok(())
}
