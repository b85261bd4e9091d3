//! Budget Tracker - personal budget and expense tracking
//!
//! A user sets a total budget, records expenses against fixed categories and
//! always sees how much is left.
//!
//! # Architecture
//!
//! - `models`: expenses, drafts, money and the category table
//! - `store`: reducer-driven state container with derived metrics
//! - `workflow`: the expense form, which validates and dispatches
//! - `storage`: JSON session snapshot
//! - `audit`: append-only change log
//! - `config`: paths and user settings
//! - `cli` / `display`: command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::Money;
//! use budget_tracker::store::{BudgetProvider, BudgetState};
//! use budget_tracker::workflow::{ExpenseForm, RawExpenseInput};
//! use chrono::NaiveDate;
//!
//! let mut provider = BudgetProvider::new(BudgetState::with_budget(Money::from_units(1000)));
//! let mut form = ExpenseForm::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//!
//! form.apply(RawExpenseInput {
//!     expense_name: Some("Groceries".into()),
//!     amount: Some("300".into()),
//!     category: Some("food".into()),
//!     date: None,
//! })?;
//! form.submit(&mut provider)?;
//!
//! assert_eq!(provider.remaining_budget(), Money::from_units(700));
//! # Ok::<(), budget_tracker::workflow::FormError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod workflow;

pub use error::{BudgetError, BudgetResult};
