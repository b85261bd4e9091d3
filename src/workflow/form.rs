//! Expense form
//!
//! Collects raw input into a draft, validates it against the provider's
//! remaining budget and dispatches `AddExpense` or `UpdateExpense`. The form
//! keeps its own draft; the store only ever sees validated values.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::models::{DraftExpense, Expense, ExpenseId, Money};
use crate::store::{BudgetAction, BudgetProvider, BudgetState};

use super::validation::{
    parse_amount, parse_category, parse_date, validate_submission, FormError,
};

/// Raw field values as typed by the user
///
/// `None` leaves the corresponding draft field as it is, which lets an edit
/// change a single field.
#[derive(Debug, Clone, Default)]
pub struct RawExpenseInput {
    pub expense_name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

/// Outcome of a successful submit
///
/// `Added` carries the id the store assigned, or `None` if no appended
/// expense could be found after the dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added(Option<ExpenseId>),
    Updated(ExpenseId),
}

/// Draft state for composing a new expense or editing an existing one
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    draft: DraftExpense,
    previous_amount: Money,
    error: Option<String>,
    today: NaiveDate,
}

impl ExpenseForm {
    /// Blank form; new drafts are dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: DraftExpense::blank(today),
            previous_amount: Money::zero(),
            error: None,
            today,
        }
    }

    /// Form reflecting `state`: pre-filled when an edit is in progress
    pub fn for_state(state: &BudgetState, today: NaiveDate) -> Self {
        let mut form = Self::new(today);
        form.sync(state);
        form
    }

    pub fn draft(&self) -> &DraftExpense {
        &self.draft
    }

    /// Amount of the expense being edited, zero for a new expense
    pub fn previous_amount(&self) -> Money {
        self.previous_amount
    }

    /// Message from the last failed apply or submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the expense being edited into the draft
    pub fn sync(&mut self, state: &BudgetState) {
        if let Some(expense) = state.editing_expense() {
            self.draft = expense.to_draft();
            self.previous_amount = expense.amount;
        }
    }

    /// Start editing `id`; returns false if the store did not enter editing
    pub fn begin_edit(&mut self, provider: &mut BudgetProvider, id: ExpenseId) -> bool {
        provider.dispatch(BudgetAction::GetExpenseById { id });
        if provider.state().editing_id != Some(id) {
            return false;
        }
        self.sync(provider.state());
        self.error = None;
        true
    }

    /// Parse raw values into the draft
    ///
    /// All provided fields are parsed before any is written, so a failure
    /// leaves the draft unchanged.
    pub fn apply(&mut self, input: RawExpenseInput) -> Result<(), FormError> {
        let (amount, category, date) = parse_fields(&input).map_err(|err| self.fail(err))?;

        if let Some(name) = input.expense_name {
            self.draft.expense_name = name.trim().to_string();
        }
        if let Some(amount) = amount {
            self.draft.amount = amount;
        }
        if let Some(category) = category {
            self.draft.category = category;
        }
        if let Some(date) = date {
            self.draft.date = date;
        }
        Ok(())
    }

    /// Validate and dispatch the draft
    ///
    /// On failure nothing is dispatched and the draft is kept so the user
    /// can correct it. On success the form resets to a blank draft.
    pub fn submit(&mut self, provider: &mut BudgetProvider) -> Result<Submission, FormError> {
        validate_submission(&self.draft, self.previous_amount, provider.remaining_budget())
            .map_err(|err| self.fail(err))?;

        let draft = std::mem::replace(&mut self.draft, DraftExpense::blank(self.today));
        let submission = match provider.state().editing_id {
            Some(id) => {
                let expense = Expense::from_draft(id, draft);
                provider.dispatch(BudgetAction::UpdateExpense { expense });
                Submission::Updated(id)
            }
            None => {
                let appended_at = provider.state().expenses.len();
                let state = provider.dispatch(BudgetAction::AddExpense { expense: draft });
                let id = state.expenses.get(appended_at).map(|e| e.id);
                if id.is_none() {
                    error!(
                        expenses = state.expenses.len(),
                        "AddExpense dispatched but no expense was appended"
                    );
                }
                Submission::Added(id)
            }
        };

        self.reset();
        debug!(?submission, "expense form submitted");
        Ok(submission)
    }

    /// Abandon an edit in progress
    pub fn cancel(&mut self, provider: &mut BudgetProvider) {
        provider.dispatch(BudgetAction::CancelEdit);
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = DraftExpense::blank(self.today);
        self.previous_amount = Money::zero();
        self.error = None;
    }

    fn fail(&mut self, err: FormError) -> FormError {
        self.error = Some(err.to_string());
        err
    }
}

type ParsedFields = (Option<Money>, Option<String>, Option<NaiveDate>);

fn parse_fields(input: &RawExpenseInput) -> Result<ParsedFields, FormError> {
    let amount = input.amount.as_deref().map(parse_amount).transpose()?;
    let category = input.category.as_deref().map(parse_category).transpose()?;
    let date = input.date.as_deref().map(parse_date).transpose()?;
    Ok((amount, category, date))
}
