use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use financehub::cli::{
    handle_budget_command, handle_calc_command, handle_dashboard_command, handle_goal_command,
    handle_group_command, handle_habit_command, handle_history_command, handle_loan_command,
    handle_portfolio_command, handle_report_command, handle_salary_command,
    handle_transaction_command,
};
use financehub::config::{paths::FinanceHubPaths, settings::Settings};
use financehub::logging::init_tracing;
use financehub::storage::Storage;

#[derive(Parser)]
#[command(
    name = "financehub",
    version,
    about = "Personal finance toolkit for the terminal",
    long_about = "FinanceHub tracks income, expenses and budgets, plans savings goals \
                  and loans, splits shared expenses and follows an investment portfolio, \
                  all from the command line with data kept in local JSON files."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// EMI, SIP and goal calculators
    #[command(subcommand)]
    Calc(financehub::cli::CalcCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(financehub::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(financehub::cli::BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(financehub::cli::GoalCommands),

    /// Loan tracking commands
    #[command(subcommand)]
    Loan(financehub::cli::LoanCommands),

    /// Shared-expense group commands
    #[command(subcommand)]
    Group(financehub::cli::GroupCommands),

    /// Investment portfolio commands
    #[command(subcommand)]
    Portfolio(financehub::cli::PortfolioCommands),

    /// Money habit commands
    #[command(subcommand)]
    Habit(financehub::cli::HabitCommands),

    /// Salary planner commands
    #[command(subcommand)]
    Salary(financehub::cli::SalaryCommands),

    /// Show the monthly dashboard
    Dashboard {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Generate the financial report
    Report {
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FinanceHubPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved data directory");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing FinanceHub at: {}", paths.base_dir().display());
            let created = financehub::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete! ({} data file(s) created)", created);
            println!();
            println!("Try:");
            println!("  financehub calc emi 500000 8.5 60");
            println!("  financehub transaction add expense 250 Food \"Lunch\"");
            println!("  financehub budget set Food 6000");
        }
        Some(Commands::Config) => {
            println!("FinanceHub Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Default goal rate: {}%", settings.default_goal_rate_percent);
        }
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Calc(cmd)) => handle_calc_command(&settings, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Loan(cmd)) => handle_loan_command(&storage, &settings, cmd)?,
        Some(Commands::Group(cmd)) => handle_group_command(&storage, &settings, cmd)?,
        Some(Commands::Portfolio(cmd)) => handle_portfolio_command(&storage, &settings, cmd)?,
        Some(Commands::Habit(cmd)) => handle_habit_command(&storage, cmd)?,
        Some(Commands::Salary(cmd)) => handle_salary_command(&storage, &settings, cmd)?,
        Some(Commands::Dashboard { month }) => handle_dashboard_command(&storage, &settings, month)?,
        Some(Commands::Report { output }) => {
            handle_report_command(&storage, &settings, output.as_deref())?
        }
        None => {
            println!("FinanceHub - personal finance toolkit for the terminal");
            println!();
            println!("Run 'financehub --help' for usage information.");
        }
    }

    Ok(())
}
