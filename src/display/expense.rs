//! Expense display formatting
//!
//! Register-style listings and the budget summary shown after every command.

use chrono::NaiveDate;

use crate::config::settings::is_date_format_usable;
use crate::config::Settings;
use crate::models::{category_name, Expense, CATEGORIES};
use crate::store::{BudgetMetrics, BudgetState};
use crate::workflow::DATE_FORMAT;

/// Format the visible expenses as a register
///
/// The expense being edited is marked with `*`.
pub fn format_expense_list(state: &BudgetState, settings: &Settings) -> String {
    let expenses: Vec<&Expense> = state.visible_expenses().collect();

    if expenses.is_empty() {
        return match &state.current_category {
            Some(category) => format!(
                "No expenses in category '{}'.\n",
                category_name(category)
            ),
            None => "No expenses recorded yet.\n".to_string(),
        };
    }

    let mut output = String::new();
    if let Some(category) = &state.current_category {
        output.push_str(&format!("Filtered by: {}\n", category_name(category)));
    }
    output.push_str(&format!(
        "{:1} {:12} {:10} {:24} {:14} {:>12}\n",
        "", "ID", "Date", "Name", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for expense in expenses {
        let marker = if state.editing_id == Some(expense.id) { "*" } else { " " };
        output.push_str(&format!(
            "{:1} {:12} {:10} {:24} {:14} {:>12}\n",
            marker,
            expense.id.to_string(),
            format_date(expense.date, settings),
            truncate(&expense.expense_name, 24),
            category_name(&expense.category),
            expense.amount.format_with_symbol(&settings.currency_symbol),
        ));
    }

    output
}

/// Format budget, spent and remaining amounts
pub fn format_summary(state: &BudgetState, metrics: &BudgetMetrics, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Budget:    {:>12}\n", state.budget.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Spent:     {:>12}  ({:.2}%)\n",
        metrics.total_expenses.format_with_symbol(symbol),
        metrics.spent_percentage(state.budget)
    ));
    output.push_str(&format!(
        "Remaining: {:>12}\n",
        metrics.remaining_budget.format_with_symbol(symbol)
    ));

    if metrics.remaining_budget.is_negative() {
        output.push_str("Warning: spending exceeds the budget\n");
    }

    if let Some(expense) = state.editing_expense() {
        output.push_str(&format!("Editing:   {} ({})\n", expense.id, expense.expense_name));
    }

    output
}

/// Format one expense in detail
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Name:     {}\n", expense.expense_name));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", category_name(&expense.category)));
    output.push_str(&format!(
        "Date:     {}\n",
        format_date(expense.date, settings)
    ));
    output
}

/// Format the category lookup table
pub fn format_category_list() -> String {
    let mut output = String::from("Categories:\n");
    for category in CATEGORIES {
        output.push_str(&format!("  {:14} {}\n", category.id, category.name));
    }
    output
}

/// Render with the configured format, or ISO dates if it is unusable
fn format_date(date: NaiveDate, settings: &Settings) -> String {
    if is_date_format_usable(&settings.date_format) {
        date.format(&settings.date_format).to_string()
    } else {
        date.format(DATE_FORMAT).to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
