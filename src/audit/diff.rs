//! Change summaries for audit entries

use crate::models::{category_name, Expense};

/// Describe which fields differ between two versions of an expense
///
/// Returns `None` when nothing user-visible changed.
pub fn expense_diff(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.expense_name != after.expense_name {
        changes.push(format!(
            "name: \"{}\" -> \"{}\"",
            truncate(&before.expense_name),
            truncate(&after.expense_name)
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: {} -> {}",
            category_name(&before.category),
            category_name(&after.category)
        ));
    }
    if before.date != after.date {
        changes.push(format!(
            "date: {} -> {}",
            before.date.format("%Y-%m-%d"),
            after.date.format("%Y-%m-%d")
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > 40 {
        let head: String = s.chars().take(37).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
