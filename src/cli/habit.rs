//! Habit CLI commands

use clap::Subcommand;

use super::{parse_date_or_today, today};
use crate::display::format_habit_list;
use crate::error::FinanceResult;
use crate::services::HabitService;
use crate::storage::Storage;

/// Habit subcommands
#[derive(Subcommand)]
pub enum HabitCommands {
    /// Start tracking a money habit
    Add {
        /// Habit name (e.g., "No eating out")
        name: String,
    },

    /// Mark a habit done for a day
    Done {
        /// Habit ID, ID prefix or name
        habit: String,
        /// Day to mark (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List habits with their current streaks
    #[command(alias = "ls")]
    List,
}

/// Handle a habit command
pub fn handle_habit_command(storage: &Storage, cmd: HabitCommands) -> FinanceResult<()> {
    let service = HabitService::new(storage);

    match cmd {
        HabitCommands::Add { name } => {
            let habit = service.create(&name)?;
            println!("Tracking habit: {} ({})", habit.name, habit.id);
        }

        HabitCommands::Done { habit, date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let (habit, recorded) = service.complete(&habit, date)?;
            if recorded {
                println!(
                    "Marked {} done on {}. Streak: {} day(s)",
                    habit.name,
                    date,
                    habit.current_streak(today())
                );
            } else {
                println!("{} was already done on {}", habit.name, date);
            }
        }

        HabitCommands::List => {
            let habits = service.list()?;
            println!("{}", format_habit_list(&habits, today()));
        }
    }

    Ok(())
}
