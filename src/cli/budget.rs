//! Budget CLI commands
//!
//! Setting the spending ceiling, the category filter, and session reset.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{category_name, find_category, Money};
use crate::store::{BudgetAction, BudgetProvider};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Change the total budget
    Set {
        /// New budget amount (e.g. "1000" or "1000.00")
        amount: String,
    },

    /// Show budget, spending and what is left
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    provider: &mut BudgetProvider,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = parse_budget(&amount)?;
            provider.dispatch(BudgetAction::SetBudget { budget });
            println!(
                "Budget set to {}",
                budget.format_with_symbol(&settings.currency_symbol)
            );
            print!("{}", format_summary(provider.state(), &provider.metrics(), settings));
        }
        BudgetCommands::Show => {
            print!("{}", format_summary(provider.state(), &provider.metrics(), settings));
        }
    }

    Ok(())
}

/// Parse a user-typed budget amount (zero allowed, negative rejected)
pub fn parse_budget(raw: &str) -> BudgetResult<Money> {
    Money::parse(raw).map_err(|e| BudgetError::Validation(e.into()))
}

/// Set or clear the category the expense list is filtered to
pub fn handle_filter(provider: &mut BudgetProvider, category: Option<String>) -> BudgetResult<()> {
    let category = match category {
        Some(raw) => {
            let found = find_category(&raw).ok_or_else(|| BudgetError::category_not_found(&raw))?;
            Some(found.id.to_string())
        }
        None => None,
    };

    provider.dispatch(BudgetAction::FilterCategory {
        category: category.clone(),
    });

    match category {
        Some(id) => println!("Showing only '{}' expenses.", category_name(&id)),
        None => println!("Category filter cleared."),
    }
    Ok(())
}

/// Clear the budget and all expenses
pub fn handle_reset(provider: &mut BudgetProvider) {
    provider.dispatch(BudgetAction::ResetApp);
    println!("Session reset. Run 'budget budget set <amount>' to start again.");
}
