//! Budget CLI commands
//!
//! Implements CLI commands for monthly category budgets and their status.

use clap::Subcommand;

use super::{parse_money, parse_month_or_current};
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_status};
use crate::error::FinanceResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category (creates or replaces it)
    Set {
        /// Category name, matched exactly against transaction categories
        category: String,
        /// Monthly amount
        amount: String,
    },

    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Show spending against each budget for a month
    Status {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove the budget for a category
    Delete {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_money(&amount)?;
            let (budget, created) = service.set(&category, amount)?;
            let verb = if created { "Created" } else { "Updated" };
            println!(
                "{} budget for {}: {} per month",
                verb,
                budget.category,
                budget.amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            println!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Status { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let lines = service.status(month)?;
            println!("{}", format_budget_status(&lines, month, symbol));
        }

        BudgetCommands::Delete { category } => {
            let budget = service.delete(&category)?;
            println!("Deleted budget for {}", budget.category);
        }
    }

    Ok(())
}
