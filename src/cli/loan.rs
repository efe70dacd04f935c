//! Loan CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::display::{format_loan_list, format_schedule};
use crate::error::FinanceResult;
use crate::services::LoanService;
use crate::storage::Storage;

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Track a loan
    Add {
        /// Loan name (e.g., "Car loan")
        name: String,
        /// Amount borrowed
        principal: String,
        /// Annual interest rate in percent
        rate: f64,
        /// Tenure in months
        months: u32,
        /// Amount still owed, defaults to the full principal
        #[arg(short, long)]
        outstanding: Option<String>,
    },

    /// List loans with EMI and repayment progress
    #[command(alias = "ls")]
    List,

    /// Show the month-by-month amortization schedule
    Schedule {
        /// Loan ID, ID prefix or name
        loan: String,
    },

    /// Delete a loan
    Delete {
        /// Loan ID, ID prefix or name
        loan: String,
    },
}

/// Handle a loan command
pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> FinanceResult<()> {
    let service = LoanService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LoanCommands::Add {
            name,
            principal,
            rate,
            months,
            outstanding,
        } => {
            let outstanding = outstanding.as_deref().map(parse_money).transpose()?;
            let loan = service.create(&name, parse_money(&principal)?, rate, months, outstanding)?;

            println!("Added loan: {}", loan.name);
            println!("  ID:          {}", loan.id);
            println!("  Principal:   {}", loan.principal.format_with_symbol(symbol));
            println!("  Outstanding: {}", loan.outstanding.format_with_symbol(symbol));
        }

        LoanCommands::List => {
            let loans = service.list_with_summaries()?;
            println!("{}", format_loan_list(&loans, symbol));
        }

        LoanCommands::Schedule { loan } => {
            let (loan, rows) = service.schedule(&loan)?;
            println!("{}", format_schedule(&loan, &rows, symbol));
        }

        LoanCommands::Delete { loan } => {
            let loan = service.delete(&loan)?;
            println!("Deleted loan: {}", loan.name);
        }
    }

    Ok(())
}
