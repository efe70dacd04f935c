//! Investment portfolio CLI commands

use clap::Subcommand;

use super::{parse_date_or_today, parse_money};
use crate::config::settings::Settings;
use crate::display::format_portfolio;
use crate::error::FinanceResult;
use crate::models::RiskLevel;
use crate::services::PortfolioService;
use crate::storage::Storage;

/// Portfolio subcommands
#[derive(Subcommand)]
pub enum PortfolioCommands {
    /// Add an investment
    Add {
        /// Fund or stock name
        name: String,
        /// Number of units held
        units: f64,
        /// Price paid per unit
        buy_price: String,
        /// Current price per unit
        current_price: String,
        /// Risk level: low, medium or high
        #[arg(short, long, default_value = "medium")]
        risk: String,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show holdings, returns and allocation
    #[command(alias = "ls")]
    List,

    /// Remove an investment
    Delete {
        /// Investment ID, ID prefix or name
        investment: String,
    },
}

/// Handle a portfolio command
pub fn handle_portfolio_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PortfolioCommands,
) -> FinanceResult<()> {
    let service = PortfolioService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PortfolioCommands::Add {
            name,
            units,
            buy_price,
            current_price,
            risk,
            date,
        } => {
            let risk: RiskLevel = risk.parse()?;
            let holding = service.add(
                &name,
                units,
                parse_money(&buy_price)?,
                parse_money(&current_price)?,
                risk,
                parse_date_or_today(date.as_deref())?,
            )?;

            println!("Added investment: {}", holding.name);
            println!("  ID:    {}", holding.id);
            println!("  Units: {}", holding.units);
            println!("  Risk:  {}", holding.risk);
        }

        PortfolioCommands::List => {
            let (holdings, summary) = service.summary()?;
            println!("{}", format_portfolio(&holdings, &summary, symbol));
        }

        PortfolioCommands::Delete { investment } => {
            let holding = service.delete(&investment)?;
            println!("Removed investment: {}", holding.name);
        }
    }

    Ok(())
}
