//! Budget reducer
//!
//! `budget_reducer` is the only place state transitions are defined. It takes
//! the current state by reference and returns the successor, so the input is
//! never mutated. It is total: unknown ids turn the action into a no-op
//! rather than an error.

use crate::models::{Expense, ExpenseId};

use super::action::BudgetAction;
use super::state::BudgetState;

/// Compute the state that follows `state` after `action`
pub fn budget_reducer(state: &BudgetState, action: BudgetAction) -> BudgetState {
    match action {
        BudgetAction::AddExpense { expense } => {
            let mut next = state.clone();
            let id = fresh_id(state);
            next.expenses.push(Expense::from_draft(id, expense));
            next
        }

        BudgetAction::RemoveExpense { id } => {
            if !state.contains(id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.expenses.retain(|e| e.id != id);
            if next.editing_id == Some(id) {
                next.editing_id = None;
            }
            next
        }

        BudgetAction::GetExpenseById { id } => {
            if !state.contains(id) {
                return state.clone();
            }
            BudgetState {
                editing_id: Some(id),
                ..state.clone()
            }
        }

        BudgetAction::UpdateExpense { expense } => {
            let mut next = state.clone();
            if let Some(slot) = next.expenses.iter_mut().find(|e| e.id == expense.id) {
                *slot = expense;
            }
            next.editing_id = None;
            next
        }

        BudgetAction::CancelEdit => BudgetState {
            editing_id: None,
            ..state.clone()
        },

        BudgetAction::SetBudget { budget } => BudgetState {
            budget,
            ..state.clone()
        },

        BudgetAction::FilterCategory { category } => BudgetState {
            current_category: category,
            ..state.clone()
        },

        BudgetAction::ResetApp => BudgetState::default(),
    }
}

/// A new id that no expense in `state` uses yet
fn fresh_id(state: &BudgetState) -> ExpenseId {
    let mut id = ExpenseId::new();
    while state.contains(id) {
        id = ExpenseId::new();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftExpense, Money};
    use chrono::NaiveDate;

    fn draft(name: &str, units: i64, category: &str) -> DraftExpense {
        DraftExpense::new(
            name,
            Money::from_units(units),
            category,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    fn add(state: &BudgetState, name: &str, units: i64) -> BudgetState {
        budget_reducer(
            state,
            BudgetAction::AddExpense {
                expense: draft(name, units, "food"),
            },
        )
    }

    fn seeded() -> BudgetState {
        let state = BudgetState::with_budget(Money::from_units(1000));
        let state = add(&state, "Groceries", 300);
        let state = add(&state, "Cinema", 40);
        add(&state, "Rent", 500)
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let start = BudgetState::with_budget(Money::from_units(1000));
        let next = add(&start, "Groceries", 300);

        assert!(start.expenses.is_empty(), "input state must not change");
        assert_eq!(next.expenses.len(), 1);
        assert_eq!(next.expenses[0].expense_name, "Groceries");
        assert!(!next.is_editing());

        let next = add(&next, "Groceries", 300);
        assert_ne!(next.expenses[0].id, next.expenses[1].id);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let state = seeded();
        let names: Vec<_> = state.expenses.iter().map(|e| e.expense_name.as_str()).collect();
        assert_eq!(names, ["Groceries", "Cinema", "Rent"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let state = seeded();
        let next = budget_reducer(&state, BudgetAction::RemoveExpense { id: ExpenseId::new() });
        assert_eq!(next, state);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = seeded();
        let id = state.expenses[1].id;

        let once = budget_reducer(&state, BudgetAction::RemoveExpense { id });
        let twice = budget_reducer(&once, BudgetAction::RemoveExpense { id });

        assert_eq!(once.expenses.len(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_editing_expense_clears_edit() {
        let state = seeded();
        let id = state.expenses[0].id;

        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });
        assert_eq!(editing.editing_id, Some(id));

        let next = budget_reducer(&editing, BudgetAction::RemoveExpense { id });
        assert_eq!(next.editing_id, None);
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_remove_other_expense_keeps_edit() {
        let state = seeded();
        let editing_id = state.expenses[0].id;
        let other = state.expenses[2].id;

        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id: editing_id });
        let next = budget_reducer(&editing, BudgetAction::RemoveExpense { id: other });
        assert_eq!(next.editing_id, Some(editing_id));
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let state = seeded();
        let next = budget_reducer(&state, BudgetAction::GetExpenseById { id: ExpenseId::new() });
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let state = seeded();
        let id = state.expenses[1].id;
        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });

        let mut changed = editing.expenses[1].clone();
        changed.expense_name = "Theatre".into();
        changed.amount = Money::from_units(60);

        let next = budget_reducer(&editing, BudgetAction::UpdateExpense { expense: changed.clone() });

        assert_eq!(next.expenses.len(), 3);
        assert_eq!(next.expenses[1], changed);
        assert_eq!(next.expenses[0], state.expenses[0]);
        assert_eq!(next.expenses[2], state.expenses[2]);
        assert!(!next.is_editing());
    }

    #[test]
    fn test_edit_round_trip_with_unchanged_fields() {
        let state = seeded();
        let id = state.expenses[0].id;

        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });
        let unchanged = editing.expenses[0].clone();
        let next = budget_reducer(&editing, BudgetAction::UpdateExpense { expense: unchanged });

        assert_eq!(next, state);
    }

    #[test]
    fn test_update_unknown_id_ends_edit_only() {
        let state = seeded();
        let id = state.expenses[0].id;
        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });

        let stranger = Expense::from_draft(ExpenseId::new(), draft("Ghost", 5, "misc"));
        let next = budget_reducer(&editing, BudgetAction::UpdateExpense { expense: stranger });

        assert_eq!(next.expenses, state.expenses);
        assert_eq!(next.editing_id, None);
        assert_eq!(next, state);
    }

    #[test]
    fn test_cancel_edit_keeps_expenses() {
        let state = seeded();
        let id = state.expenses[2].id;
        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });

        let next = budget_reducer(&editing, BudgetAction::CancelEdit);
        assert_eq!(next.editing_id, None);
        assert_eq!(next.expenses, state.expenses);
    }

    #[test]
    fn test_set_budget_below_spending_is_allowed() {
        let state = seeded();
        let next = budget_reducer(&state, BudgetAction::SetBudget { budget: Money::from_units(100) });

        assert_eq!(next.budget, Money::from_units(100));
        assert_eq!(next.expenses, state.expenses);
    }

    #[test]
    fn test_filter_category_leaves_expenses() {
        let state = seeded();
        let next = budget_reducer(
            &state,
            BudgetAction::FilterCategory { category: Some("health".into()) },
        );

        assert_eq!(next.current_category.as_deref(), Some("health"));
        assert_eq!(next.expenses, state.expenses);
        assert_eq!(next.visible_expenses().count(), 0);
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let state = seeded();
        let id = state.expenses[0].id;
        let editing = budget_reducer(&state, BudgetAction::GetExpenseById { id });

        assert_eq!(budget_reducer(&editing, BudgetAction::ResetApp), BudgetState::default());
    }
}
