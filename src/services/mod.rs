//! Service layer for FinanceHub
//!
//! Services sit on top of the storage layer: they build validated records,
//! persist them, write the audit trail and hand stored data to the pure
//! calculations in `calc`.

pub mod budget;
pub mod goal;
pub mod group;
pub mod habit;
pub mod loan;
pub mod portfolio;
pub mod salary;
pub mod transaction;

pub use budget::BudgetService;
pub use goal::GoalService;
pub use group::GroupService;
pub use habit::HabitService;
pub use loan::LoanService;
pub use portfolio::PortfolioService;
pub use salary::SalaryService;
pub use transaction::{TransactionService, UpdateTransactionInput};
