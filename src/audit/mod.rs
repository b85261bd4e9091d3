//! Audit logging
//!
//! Every committed change to the budget (expense created, updated or
//! deleted, budget changed, session reset) is appended to a line-delimited
//! JSON log with before/after values.
//!
//! - `AuditEntry`: one record with timestamp, operation and entity info
//! - `AuditLogger`: appends to and reads back the JSONL file
//! - `expense_diff`: human-readable summary of an expense update

mod diff;
mod entry;
mod logger;

pub use diff::expense_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
