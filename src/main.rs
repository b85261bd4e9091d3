use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_filter, handle_reset, parse_budget,
    BudgetCommands, ExpenseCommands,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::display::{format_category_list, format_expense_list, format_summary};
use budget_tracker::models::category_name;
use budget_tracker::storage::SessionRepository;
use budget_tracker::store::{BudgetAction, BudgetProvider, BudgetState};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Set a total budget, record expenses against categories and \
                  keep an eye on what is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session with a total budget (replaces any existing one)
    Init {
        /// Total budget (e.g. "1000")
        #[arg(short, long)]
        budget: String,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Filter the expense list to one category
    Filter {
        /// Category id
        category: Option<String>,
        /// Remove the filter
        #[arg(long, conflicts_with = "category")]
        clear: bool,
    },

    /// List available categories
    Categories,

    /// Show the budget summary and expense list
    Status,

    /// Clear the budget and all expenses
    Reset,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let sessions = SessionRepository::new(paths.session_file());

    match cli.command {
        Some(Commands::Init { budget }) => {
            let budget = parse_budget(&budget)?;
            paths.ensure_directories()?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            let mut provider = attach_audit(BudgetProvider::new(BudgetState::default()), &paths, &settings);
            provider.dispatch(BudgetAction::SetBudget { budget });
            sessions.save(provider.state())?;

            println!("Started a new budget session at: {}", paths.base_dir().display());
            print!("{}", format_summary(provider.state(), &provider.metrics(), &settings));
        }
        Some(Commands::Budget(cmd)) => {
            let mut provider = open_session(&sessions, &paths, &settings)?;
            handle_budget_command(&mut provider, &settings, cmd)?;
            sessions.save(provider.state())?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut provider = open_session(&sessions, &paths, &settings)?;
            handle_expense_command(&mut provider, &settings, cmd)?;
            sessions.save(provider.state())?;
        }
        Some(Commands::Filter { category, clear }) => {
            let mut provider = open_session(&sessions, &paths, &settings)?;
            if category.is_none() && !clear {
                match &provider.state().current_category {
                    Some(id) => println!("Current filter: {}", category_name(id)),
                    None => println!("No category filter set."),
                }
                return Ok(());
            }
            handle_filter(&mut provider, category)?;
            sessions.save(provider.state())?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list());
        }
        Some(Commands::Status) => {
            let provider = open_session(&sessions, &paths, &settings)?;
            print!("{}", format_summary(provider.state(), &provider.metrics(), &settings));
            println!();
            print!("{}", format_expense_list(provider.state(), &settings));
        }
        Some(Commands::Reset) => {
            let mut provider = open_session(&sessions, &paths, &settings)?;
            handle_reset(&mut provider);
            sessions.save(provider.state())?;
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Session file:   {}", paths.session_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Audit { limit }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("Budget Tracker - personal budget and expenses");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget init --budget <amount>' to start.");
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by `BUDGET_LOG` or the configured level
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env("BUDGET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_session(
    sessions: &SessionRepository,
    paths: &BudgetPaths,
    settings: &Settings,
) -> Result<BudgetProvider> {
    let state = sessions.load_required()?;
    Ok(attach_audit(BudgetProvider::new(state), paths, settings))
}

fn attach_audit(provider: BudgetProvider, paths: &BudgetPaths, settings: &Settings) -> BudgetProvider {
    if settings.audit_enabled {
        provider.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        provider
    }
}
