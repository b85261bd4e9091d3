//! Core data models for the budget tracker
//!
//! Expenses, their drafts, money amounts and the fixed category table.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{category_name, find_category, Category, CATEGORIES};
pub use expense::{DraftExpense, Expense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
