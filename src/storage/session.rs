//! Session snapshot
//!
//! Saves the whole [`BudgetState`] to `session.json` between invocations so
//! the CLI can pick the session up where it left off. Snapshots are checked
//! against the store invariants when loaded.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::store::{BudgetState, InvariantViolation};

use super::file_io::{read_json_optional, write_json_atomic};

/// Loads and saves the session state
#[derive(Debug, Clone)]
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved session, if there is one
    ///
    /// An edit selection pointing at a missing expense is dropped. Duplicate
    /// expense ids cannot be repaired and are reported as a storage error.
    pub fn load(&self) -> BudgetResult<Option<BudgetState>> {
        let Some(mut state) = read_json_optional::<BudgetState, _>(&self.path)? else {
            return Ok(None);
        };

        loop {
            match state.check_invariants() {
                Ok(()) => break,
                Err(InvariantViolation::OrphanedEditingId(id)) => {
                    warn!(%id, "dropping edit selection for missing expense");
                    state.editing_id = None;
                }
                Err(violation @ InvariantViolation::DuplicateId(_)) => {
                    return Err(BudgetError::Storage(format!(
                        "Corrupt session {}: {}",
                        self.path.display(),
                        violation
                    )));
                }
            }
        }

        debug!(
            path = %self.path.display(),
            expenses = state.expenses.len(),
            "loaded session"
        );
        Ok(Some(state))
    }

    /// Load the saved session, failing if none was started
    pub fn load_required(&self) -> BudgetResult<BudgetState> {
        self.load()?.ok_or(BudgetError::NoSession)
    }

    pub fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(path = %self.path.display(), "saved session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftExpense, ExpenseId, Money};
    use crate::store::{budget_reducer, BudgetAction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo(temp_dir: &TempDir) -> SessionRepository {
        SessionRepository::new(temp_dir.path().join("data").join("session.json"))
    }

    fn sample_state() -> BudgetState {
        let state = BudgetState::with_budget(Money::from_units(1000));
        let state = budget_reducer(
            &state,
            BudgetAction::AddExpense {
                expense: DraftExpense::new(
                    "Groceries",
                    Money::from_units(300),
                    "food",
                    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                ),
            },
        );
        let id = state.expenses[0].id;
        budget_reducer(&state, BudgetAction::GetExpenseById { id })
    }

    #[test]
    fn test_missing_session() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_none());
        assert!(matches!(repo.load_required(), Err(BudgetError::NoSession)));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let state = sample_state();

        repo.save(&state).unwrap();
        assert_eq!(repo.load_required().unwrap(), state);
    }

    #[test]
    fn test_orphaned_edit_selection_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let mut state = sample_state();
        state.editing_id = Some(ExpenseId::new());

        repo.save(&state).unwrap();
        let loaded = repo.load_required().unwrap();
        assert_eq!(loaded.editing_id, None);
        assert_eq!(loaded.expenses, state.expenses);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let mut state = sample_state();
        state.expenses.push(state.expenses[0].clone());

        repo.save(&state).unwrap();
        assert!(matches!(repo.load(), Err(BudgetError::Storage(_))));
    }
}
