//! Reports module for FinanceHub
//!
//! Derived views over a data snapshot: the monthly dashboard, spending by
//! category and the plain-text financial report.

pub mod dashboard;
pub mod spending;
pub mod summary;

pub use dashboard::MonthlySummary;
pub use spending::{CategorySpending, SpendingBreakdown};
pub use summary::FinancialReport;
