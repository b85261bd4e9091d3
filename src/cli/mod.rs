//! CLI command handlers
//!
//! Bridges clap argument parsing with the store and the expense form.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, handle_filter, handle_reset, parse_budget, BudgetCommands};
pub use expense::{handle_expense_command, resolve_expense_id, ExpenseCommands};
