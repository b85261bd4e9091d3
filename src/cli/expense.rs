//! Expense CLI commands
//!
//! Each command builds raw input for the expense form or dispatches a store
//! action directly; the caller saves the session afterwards.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{find_category, ExpenseId};
use crate::store::{BudgetAction, BudgetProvider, BudgetState};
use crate::workflow::{ExpenseForm, RawExpenseInput, Submission};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g. "300" or "12.50")
        amount: String,
        /// Category id (see 'budget categories')
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses (respects the active category filter)
    List {
        /// Only show this category, ignoring the saved filter
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one expense
    Show {
        /// Expense ID (full or short form)
        expense: String,
    },

    /// Start editing an expense
    Edit {
        /// Expense ID (full or short form)
        expense: String,
    },

    /// Save changes to the expense being edited
    Update {
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Abandon the edit in progress
    Cancel,

    /// Delete an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (full or short form)
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    provider: &mut BudgetProvider,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            if let Some(editing) = provider.state().editing_expense() {
                return Err(BudgetError::EditInProgress(editing.id.to_string()));
            }

            let mut form = ExpenseForm::new(today);
            form.apply(RawExpenseInput {
                expense_name: Some(name),
                amount: Some(amount),
                category: Some(category),
                date,
            })?;

            match form.submit(provider)? {
                Submission::Added(Some(id)) => println!("Added expense {}", id),
                Submission::Added(None) => println!("Added expense"),
                Submission::Updated(_) => {}
            }
            print!("{}", format_summary(provider.state(), &provider.metrics(), settings));
        }

        ExpenseCommands::List { category } => match category {
            Some(category) => {
                let category = find_category(&category)
                    .ok_or_else(|| BudgetError::category_not_found(&category))?;
                let view = BudgetState {
                    current_category: Some(category.id.to_string()),
                    ..provider.state().clone()
                };
                print!("{}", format_expense_list(&view, settings));
            }
            None => print!("{}", format_expense_list(provider.state(), settings)),
        },

        ExpenseCommands::Show { expense } => {
            let id = resolve_expense_id(provider.state(), &expense)?;
            if let Some(expense) = provider.state().expense(id) {
                print!("{}", format_expense_details(expense, settings));
            }
        }

        ExpenseCommands::Edit { expense } => {
            let id = resolve_expense_id(provider.state(), &expense)?;
            let mut form = ExpenseForm::new(today);
            if !form.begin_edit(provider, id) {
                return Err(BudgetError::expense_not_found(expense));
            }

            println!("Editing expense {}", id);
            if let Some(expense) = provider.state().editing_expense() {
                print!("{}", format_expense_details(expense, settings));
            }
            println!("Run 'budget expense update' to save changes or 'budget expense cancel' to stop.");
        }

        ExpenseCommands::Update {
            name,
            amount,
            category,
            date,
        } => {
            if !provider.state().is_editing() {
                return Err(BudgetError::NotEditing);
            }

            let mut form = ExpenseForm::for_state(provider.state(), today);
            form.apply(RawExpenseInput {
                expense_name: name,
                amount,
                category,
                date,
            })?;

            if let Submission::Updated(id) = form.submit(provider)? {
                println!("Updated expense {}", id);
            }
            print!("{}", format_summary(provider.state(), &provider.metrics(), settings));
        }

        ExpenseCommands::Cancel => {
            if !provider.state().is_editing() {
                println!("No edit in progress.");
                return Ok(());
            }
            let mut form = ExpenseForm::for_state(provider.state(), today);
            form.cancel(provider);
            println!("Edit cancelled.");
        }

        ExpenseCommands::Remove { expense } => {
            let id = resolve_expense_id(provider.state(), &expense)?;
            provider.dispatch(BudgetAction::RemoveExpense { id });
            println!("Removed expense {}", id);
            print!("{}", format_summary(provider.state(), &provider.metrics(), settings));
        }
    }

    Ok(())
}

/// Resolve a full or short expense id against the current expenses
pub fn resolve_expense_id(state: &BudgetState, identifier: &str) -> BudgetResult<ExpenseId> {
    let mut matches = state.expenses.iter().filter(|e| e.id.matches(identifier));

    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.id),
        (Some(_), Some(_)) => Err(BudgetError::Ambiguous {
            entity_type: "Expense",
            identifier: identifier.to_string(),
        }),
        (None, _) => Err(BudgetError::expense_not_found(identifier)),
    }
}
