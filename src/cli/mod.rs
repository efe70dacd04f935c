//! CLI command handlers
//!
//! Each submodule defines a clap subcommand enum and a `handle_*_command`
//! function that bridges the parsed arguments to the service layer and the
//! display formatters.

pub mod budget;
pub mod calc;
pub mod goal;
pub mod group;
pub mod habit;
pub mod loan;
pub mod portfolio;
pub mod report;
pub mod salary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use group::{handle_group_command, GroupCommands};
pub use habit::{handle_habit_command, HabitCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use portfolio::{handle_portfolio_command, PortfolioCommands};
pub use report::{handle_dashboard_command, handle_history_command, handle_report_command};
pub use salary::{handle_salary_command, SalaryCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, YearMonth};

/// Parse a user-entered amount ("1500", "1,500.50", "₹99")
pub(crate) fn parse_money(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> FinanceResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s))
        }),
        None => Ok(today()),
    }
}

/// Parse a `YYYY-MM` month, defaulting to the current one
pub(crate) fn parse_month_or_current(input: Option<&str>) -> FinanceResult<YearMonth> {
    match input {
        Some(s) => s.parse(),
        None => Ok(YearMonth::current()),
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
