//! Core data models for FinanceHub
//!
//! Typed records for transactions, budgets, goals, loans, shared-expense
//! groups, investments, habits and the salary plan. Constructors validate
//! their input so the calculation layer only ever sees well-formed records.

pub mod budget;
pub mod goal;
pub mod group;
pub mod habit;
pub mod holding;
pub mod ids;
pub mod loan;
pub mod money;
pub mod salary;
pub mod snapshot;
pub mod transaction;

pub use budget::Budget;
pub use goal::Goal;
pub use group::{Group, GroupExpense, MemberId};
pub use habit::Habit;
pub use holding::{Holding, RiskLevel};
pub use ids::{BudgetId, ExpenseId, GoalId, GroupId, HabitId, HoldingId, LoanId, TransactionId};
pub use loan::Loan;
pub use money::Money;
pub use salary::SalaryPlan;
pub use snapshot::FinanceSnapshot;
pub use transaction::{Transaction, TransactionFilter, TransactionKind, YearMonth};

use crate::error::{FinanceError, FinanceResult};

/// Trim a label and reject it if nothing is left
pub(crate) fn require_label(value: impl Into<String>, field: &str) -> FinanceResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_positive(amount: Money, field: &str) -> FinanceResult<Money> {
    if !amount.is_positive() {
        return Err(FinanceError::Validation(format!(
            "{} must be greater than zero, got {}",
            field, amount
        )));
    }
    require_within_max(amount, field)
}

pub(crate) fn require_non_negative(amount: Money, field: &str) -> FinanceResult<Money> {
    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "{} cannot be negative, got {}",
            field, amount
        )));
    }
    require_within_max(amount, field)
}

fn require_within_max(amount: Money, field: &str) -> FinanceResult<Money> {
    if amount > Money::MAX {
        return Err(FinanceError::Validation(format!(
            "{} cannot exceed {}, got {}",
            field,
            Money::MAX,
            amount
        )));
    }
    Ok(amount)
}

/// Annual percentage rates must be finite and not negative
pub(crate) fn require_rate(rate: f64, field: &str) -> FinanceResult<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(FinanceError::Validation(format!(
            "{} must be a non-negative percentage, got {}",
            field, rate
        )));
    }
    Ok(rate)
}
