//! Display formatting for terminal output
//!
//! Turns records and derived figures into tables and summaries. Every
//! formatter takes the currency symbol from the user's settings.

pub mod budget;
pub mod dashboard;
pub mod group;
pub mod habit;
pub mod planning;
pub mod portfolio;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_status};
pub use dashboard::{format_dashboard, format_salary, format_spending};
pub use group::{format_balances, format_group_list};
pub use habit::format_habit_list;
pub use planning::{
    format_goal_list, format_goal_plan, format_loan_list, format_loan_quote, format_schedule,
    format_sip_projection,
};
pub use portfolio::format_portfolio;
pub use transaction::format_transaction_list;
