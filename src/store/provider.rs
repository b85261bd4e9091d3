//! Budget provider
//!
//! Owns the single [`BudgetState`] of a session and is the only writer to it.
//! Consumers read the state and the derived metrics through `&BudgetProvider`
//! and request changes through [`BudgetProvider::dispatch`]. After every
//! dispatch the new state is in place before subscribers are notified, so no
//! consumer can observe a stale value.

use tracing::{debug, error, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::models::Money;

use super::action::BudgetAction;
use super::metrics::{self, BudgetMetrics};
use super::reducer::budget_reducer;
use super::state::BudgetState;

type Subscriber = Box<dyn FnMut(&BudgetState, &BudgetMetrics)>;

/// Session-scoped owner of the budget store
pub struct BudgetProvider {
    state: BudgetState,
    subscribers: Vec<Subscriber>,
    audit: Option<AuditLogger>,
}

impl BudgetProvider {
    /// Create a provider around an initial state
    pub fn new(initial: BudgetState) -> Self {
        if let Err(violation) = initial.check_invariants() {
            error!(%violation, "initial budget state violates store invariants");
        }
        Self {
            state: initial,
            subscribers: Vec::new(),
            audit: None,
        }
    }

    /// Record committed mutations to the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Give up ownership of the state, e.g. to snapshot it
    pub fn into_state(self) -> BudgetState {
        self.state
    }

    /// Sum of all expenses in the current state
    pub fn total_expenses(&self) -> Money {
        metrics::total_expenses(&self.state)
    }

    /// Budget minus total expenses in the current state
    pub fn remaining_budget(&self) -> Money {
        metrics::remaining_budget(&self.state)
    }

    /// Both derived metrics at once
    pub fn metrics(&self) -> BudgetMetrics {
        BudgetMetrics::compute(&self.state)
    }

    /// Register a callback invoked after every dispatch
    pub fn subscribe(&mut self, subscriber: impl FnMut(&BudgetState, &BudgetMetrics) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an action and republish the result
    pub fn dispatch(&mut self, action: BudgetAction) -> &BudgetState {
        debug!(action = action.kind(), "dispatching");

        let audited = self.audit.as_ref().map(|_| action.clone());
        let next = budget_reducer(&self.state, action);
        let previous = std::mem::replace(&mut self.state, next);

        let checked = self.state.check_invariants();
        if let Err(violation) = &checked {
            error!(%violation, "store transition produced an invalid state");
        }
        debug_assert!(checked.is_ok(), "store invariant violated: {:?}", checked);

        if let (Some(logger), Some(action)) = (&self.audit, audited) {
            if let Some(entry) = audit_entry(&action, &previous, &self.state) {
                if let Err(err) = logger.log(&entry) {
                    warn!(error = %err, "failed to write audit entry");
                }
            }
        }

        let metrics = BudgetMetrics::compute(&self.state);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state, &metrics);
        }

        &self.state
    }
}

/// Audit record for a transition, if it changed recorded data
fn audit_entry(
    action: &BudgetAction,
    before: &BudgetState,
    after: &BudgetState,
) -> Option<AuditEntry> {
    match action {
        BudgetAction::AddExpense { .. } => {
            let added = after.expenses.last()?;
            Some(AuditEntry::create(
                EntityType::Expense,
                added.id.to_string(),
                Some(added.expense_name.clone()),
                added,
            ))
        }
        BudgetAction::RemoveExpense { id } => {
            let removed = before.expense(*id)?;
            Some(AuditEntry::delete(
                EntityType::Expense,
                removed.id.to_string(),
                Some(removed.expense_name.clone()),
                removed,
            ))
        }
        BudgetAction::UpdateExpense { expense } => {
            let old = before.expense(expense.id)?;
            Some(AuditEntry::update(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.expense_name.clone()),
                old,
                expense,
                crate::audit::expense_diff(old, expense),
            ))
        }
        BudgetAction::SetBudget { budget } if *budget != before.budget => {
            Some(AuditEntry::update(
                EntityType::Budget,
                "budget",
                None,
                &before.budget,
                budget,
                Some(format!("budget: {} -> {}", before.budget, budget)),
            ))
        }
        BudgetAction::ResetApp if before != after => Some(AuditEntry::delete(
            EntityType::Session,
            "session",
            None,
            before,
        )),
        _ => None,
    }
}
