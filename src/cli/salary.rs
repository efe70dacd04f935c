//! Salary plan CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::calc::salary::allocate;
use crate::config::settings::Settings;
use crate::display::format_salary;
use crate::error::FinanceResult;
use crate::services::SalaryService;
use crate::storage::Storage;

/// Salary subcommands
#[derive(Subcommand)]
pub enum SalaryCommands {
    /// Set the monthly salary and how it splits across needs, wants and savings
    Set {
        /// Monthly take-home salary
        amount: String,
        /// Percent for needs
        #[arg(default_value = "50")]
        needs: f64,
        /// Percent for wants
        #[arg(default_value = "30")]
        wants: f64,
        /// Percent for savings
        #[arg(default_value = "20")]
        savings: f64,
    },

    /// Show the salary plan and its allocation
    Show,
}

/// Handle a salary command
pub fn handle_salary_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SalaryCommands,
) -> FinanceResult<()> {
    let service = SalaryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SalaryCommands::Set {
            amount,
            needs,
            wants,
            savings,
        } => {
            let plan = service.set(parse_money(&amount)?, needs, wants, savings)?;
            println!("Salary plan saved.");
            println!("{}", format_salary(&plan, &allocate(&plan), symbol));
        }

        SalaryCommands::Show => match service.show()? {
            Some((plan, allocation)) => println!("{}", format_salary(&plan, &allocation, symbol)),
            None => println!("No salary plan set. Use 'financehub salary set <amount>' to create one."),
        },
    }

    Ok(())
}
