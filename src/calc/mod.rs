//! Financial calculations
//!
//! Pure functions over records or plain numbers: no I/O, no logging, no
//! shared state. Safe to call from anywhere, concurrently.
//!
//! - `annuity`: EMI, SIP maturity and required contribution
//! - `budget`: spending against budgets with ok/warning/exceeded status
//! - `goal`: monthly contribution needed to reach a goal
//! - `ledger`: equal-split balances for shared-expense groups
//! - `loan`, `portfolio`, `salary`: derived figures for the other records

pub mod annuity;
pub mod budget;
pub mod goal;
pub mod ledger;
pub mod loan;
pub mod portfolio;
pub mod salary;

pub use annuity::{emi, required_contribution, sip_maturity, LoanQuote, SipProjection};
pub use budget::{BudgetStatus, BudgetUtilization};
pub use goal::GoalPlan;
pub use ledger::{GroupBalances, MemberBalance};
