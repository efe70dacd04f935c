//! Shared-expense group CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::display::{format_balances, format_group_list};
use crate::error::FinanceResult;
use crate::services::GroupService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a group of people who share expenses
    Create {
        /// Group name (e.g., "Goa trip")
        name: String,
        /// Comma-separated member names (e.g., "A,B,C")
        members: String,
    },

    /// List groups
    #[command(alias = "ls")]
    List,

    /// Record an expense one member paid for the whole group
    Expense {
        /// Group ID, ID prefix or name
        group: String,
        /// Member who paid
        paid_by: String,
        /// Amount paid
        amount: String,
        /// What it was for
        description: String,
    },

    /// Show who owes and who is owed
    #[command(alias = "balances")]
    Settle {
        /// Group ID, ID prefix or name
        group: String,
    },

    /// Delete a group and its expenses
    Delete {
        /// Group ID, ID prefix or name
        group: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> FinanceResult<()> {
    let service = GroupService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GroupCommands::Create { name, members } => {
            let group = service.create(&name, &members)?;
            let names: Vec<_> = group.members.iter().map(|m| m.as_str()).collect();
            println!("Created group: {}", group.name);
            println!("  ID:      {}", group.id);
            println!("  Members: {}", names.join(", "));
        }

        GroupCommands::List => {
            let groups = service.list()?;
            println!("{}", format_group_list(&groups, symbol));
        }

        GroupCommands::Expense {
            group,
            paid_by,
            amount,
            description,
        } => {
            let (group, expense) =
                service.add_expense(&group, &paid_by, parse_money(&amount)?, &description)?;
            println!(
                "{} paid {} for {} in {}",
                expense.paid_by,
                expense.amount.format_with_symbol(symbol),
                expense.description,
                group.name
            );
        }

        GroupCommands::Settle { group } => {
            let (group, balances) = service.balances(&group)?;
            println!("{}", format_balances(&group, &balances, symbol));
        }

        GroupCommands::Delete { group } => {
            let group = service.delete(&group)?;
            println!("Deleted group: {}", group.name);
        }
    }

    Ok(())
}
