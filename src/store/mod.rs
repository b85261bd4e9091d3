//! Budget store
//!
//! A reducer-driven state container:
//!
//! - `action`: the closed set of transitions (`BudgetAction`)
//! - `state`: the application state (`BudgetState`) and its invariants
//! - `reducer`: the pure transition function
//! - `metrics`: totals derived from the state
//! - `provider`: the session owner that dispatches and republishes

pub mod action;
pub mod metrics;
pub mod provider;
pub mod reducer;
pub mod state;

pub use action::BudgetAction;
pub use metrics::{remaining_budget, total_expenses, BudgetMetrics};
pub use provider::BudgetProvider;
pub use reducer::budget_reducer;
pub use state::{BudgetState, InvariantViolation};
