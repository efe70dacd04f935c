//! Calculator CLI commands
//!
//! Stateless EMI, SIP and goal calculators. Nothing is read from or written
//! to storage.

use clap::Subcommand;

use super::parse_money;
use crate::calc::annuity::{loan_quote, sip_projection};
use crate::calc::goal::plan;
use crate::config::settings::Settings;
use crate::display::{format_goal_plan, format_loan_quote, format_sip_projection};
use crate::error::{FinanceError, FinanceResult};
use crate::models::Goal;

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Monthly instalment for a loan
    Emi {
        /// Loan principal
        principal: f64,
        /// Annual interest rate in percent (e.g., 8.5)
        rate: f64,
        /// Tenure in months
        months: u32,
    },

    /// Maturity value of a monthly SIP
    Sip {
        /// Monthly contribution
        monthly: f64,
        /// Expected annual return in percent
        rate: f64,
        /// Investment period in years
        years: u32,
    },

    /// Monthly SIP needed to reach a goal
    Goal {
        /// Target amount
        target: String,
        /// Amount already saved
        current: String,
        /// Months until the goal date
        months: u32,
        /// Expected annual return in percent (defaults to the configured rate)
        #[arg(short, long)]
        rate: Option<f64>,
    },
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CalcCommands::Emi {
            principal,
            rate,
            months,
        } => {
            let quote = loan_quote(principal, rate, months)?;
            println!("{}", format_loan_quote(&quote, symbol));
        }

        CalcCommands::Sip {
            monthly,
            rate,
            years,
        } => {
            let months = years.checked_mul(12).ok_or_else(|| {
                FinanceError::InvalidInput(format!("Investment period of {} years is too long", years))
            })?;
            let projection = sip_projection(monthly, rate, months)?;
            println!("{}", format_sip_projection(&projection, symbol));
        }

        CalcCommands::Goal {
            target,
            current,
            months,
            rate,
        } => {
            let rate = rate.unwrap_or(settings.default_goal_rate_percent);
            let goal = Goal::new(
                "goal",
                parse_money(&target)?,
                parse_money(&current)?,
                months,
                rate,
            )?;
            println!("{}", format_goal_plan(&plan(&goal)?, symbol));
        }
    }

    Ok(())
}
