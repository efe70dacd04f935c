//! Goal CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::FinanceResult;
use crate::models::Money;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name (e.g., "House down payment")
        name: String,
        /// Target amount
        target: String,
        /// Months until the goal date
        months: u32,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<String>,
        /// Expected annual return in percent (defaults to the configured rate)
        #[arg(short, long)]
        rate: Option<f64>,
    },

    /// List goals with the monthly SIP each one needs
    #[command(alias = "ls")]
    List,

    /// Record how much has been saved so far
    Update {
        /// Goal ID, ID prefix or name
        goal: String,
        /// New saved amount
        current: String,
    },

    /// Delete a goal
    Delete {
        /// Goal ID, ID prefix or name
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            months,
            current,
            rate,
        } => {
            let current = match current {
                Some(c) => parse_money(&c)?,
                None => Money::zero(),
            };
            let goal = service.create(
                &name,
                parse_money(&target)?,
                current,
                months,
                rate.unwrap_or(settings.default_goal_rate_percent),
            )?;

            println!("Created goal: {}", goal.name);
            println!("  ID:      {}", goal.id);
            println!("  Target:  {}", goal.target_amount.format_with_symbol(symbol));
            println!("  Horizon: {} months", goal.horizon_months);
        }

        GoalCommands::List => {
            let goals = service.list_with_plans()?;
            println!("{}", format_goal_list(&goals, symbol));
        }

        GoalCommands::Update { goal, current } => {
            let goal = service.update_progress(&goal, parse_money(&current)?)?;
            println!(
                "Updated {}: {} of {} saved",
                goal.name,
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol)
            );
        }

        GoalCommands::Delete { goal } => {
            let goal = service.delete(&goal)?;
            println!("Deleted goal: {}", goal.name);
        }
    }

    Ok(())
}
