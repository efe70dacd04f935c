//! Budget utilisation
//!
//! Compares expense totals per category against each budget's cap. Choosing
//! which transactions count (this month, last month, ...) is up to the caller.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Money, Transaction};

/// Above this utilisation a budget is flagged as a warning
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Above this utilisation a budget is exceeded
pub const EXCEEDED_THRESHOLD_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Ok,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn for_utilization(utilization_percent: f64) -> Self {
        if utilization_percent > EXCEEDED_THRESHOLD_PERCENT {
            Self::Exceeded
        } else if utilization_percent > WARNING_THRESHOLD_PERCENT {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Spending against one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUtilization {
    pub category: String,
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    pub utilization_percent: f64,
    pub status: BudgetStatus,
}

impl BudgetUtilization {
    /// Utilisation clamped to 0..=100 for progress bars
    pub fn display_percent(&self) -> f64 {
        self.utilization_percent.clamp(0.0, 100.0)
    }
}

/// Evaluate every budget against the expenses in `transactions`
///
/// One line per budget, in the order given. Categories are matched exactly.
/// A budget with a zero amount has no defined utilisation and fails the whole
/// evaluation with a data-integrity error.
pub fn evaluate(
    transactions: &[Transaction],
    budgets: &[Budget],
) -> FinanceResult<Vec<BudgetUtilization>> {
    let mut spent_by_category: HashMap<&str, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let spent = spent_by_category.entry(txn.category.as_str()).or_default();
        *spent = spent.checked_add(txn.amount).ok_or_else(|| {
            FinanceError::InvalidInput(format!(
                "spending in '{}' is too large to total",
                txn.category
            ))
        })?;
    }

    budgets
        .iter()
        .map(|budget| {
            if !budget.amount.is_positive() {
                return Err(FinanceError::DataIntegrity(format!(
                    "budget for '{}' has amount {}; utilisation is undefined",
                    budget.category, budget.amount
                )));
            }

            let spent = spent_by_category
                .get(budget.category.as_str())
                .copied()
                .unwrap_or_default();
            let utilization_percent =
                spent.minor() as f64 * 100.0 / budget.amount.minor() as f64;

            Ok(BudgetUtilization {
                category: budget.category.clone(),
                budgeted: budget.amount,
                spent,
                remaining: budget.amount - spent,
                utilization_percent,
                status: BudgetStatus::for_utilization(utilization_percent),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, minor: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::from_minor(minor),
            category,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            "test",
        )
        .unwrap()
    }

    fn budget(category: &str, minor: i64) -> Budget {
        Budget::new(category, Money::from_minor(minor)).unwrap()
    }

    fn status_for_spent(spent_minor: i64) -> BudgetStatus {
        let txns = vec![txn(TransactionKind::Expense, spent_minor, "Food")];
        evaluate(&txns, &[budget("Food", 10_000)]).unwrap()[0].status
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(BudgetStatus::for_utilization(0.0), BudgetStatus::Ok);
        assert_eq!(BudgetStatus::for_utilization(80.0), BudgetStatus::Ok);
        assert_eq!(BudgetStatus::for_utilization(80.01), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::for_utilization(100.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::for_utilization(100.01), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_status_boundaries_through_evaluate() {
        // Budget of 100.00
        assert_eq!(status_for_spent(8_000), BudgetStatus::Ok);
        assert_eq!(status_for_spent(8_001), BudgetStatus::Warning);
        assert_eq!(status_for_spent(10_000), BudgetStatus::Warning);
        assert_eq!(status_for_spent(10_001), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_only_matching_expenses_count() {
        let txns = vec![
            txn(TransactionKind::Expense, 3_000, "Food"),
            txn(TransactionKind::Expense, 2_000, "Food"),
            txn(TransactionKind::Income, 50_000, "Food"),
            txn(TransactionKind::Expense, 7_000, "Rent"),
            txn(TransactionKind::Expense, 1_000, "food"),
        ];
        let lines = evaluate(&txns, &[budget("Food", 10_000), budget("Travel", 5_000)]).unwrap();

        assert_eq!(lines.len(), 2);
        let food = &lines[0];
        assert_eq!(food.spent, Money::from_minor(5_000));
        assert_eq!(food.remaining, Money::from_minor(5_000));
        assert!((food.utilization_percent - 50.0).abs() < 1e-9);
        assert_eq!(food.status, BudgetStatus::Ok);

        let travel = &lines[1];
        assert_eq!(travel.spent, Money::zero());
        assert_eq!(travel.utilization_percent, 0.0);
    }

    #[test]
    fn test_overspent_budget() {
        let txns = vec![txn(TransactionKind::Expense, 15_000, "Fun")];
        let line = &evaluate(&txns, &[budget("Fun", 10_000)]).unwrap()[0];
        assert_eq!(line.status, BudgetStatus::Exceeded);
        assert_eq!(line.remaining, Money::from_minor(-5_000));
        assert!((line.utilization_percent - 150.0).abs() < 1e-9);
        assert_eq!(line.display_percent(), 100.0);
    }

    #[test]
    fn test_zero_budget_is_data_integrity_error() {
        let mut zero = budget("Food", 100);
        zero.amount = Money::zero();
        let err = evaluate(&[], &[zero]).unwrap_err();
        assert!(err.is_data_integrity());
        assert!(err.to_string().contains("Food"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BudgetStatus::Exceeded).unwrap(),
            "\"exceeded\""
        );
    }

    #[test]
    fn test_amounts_above_max_are_rejected_at_construction() {
        let too_big = Money::from_minor(Money::MAX.minor() + 1);
        assert!(Transaction::new(
            TransactionKind::Expense,
            too_big,
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            "test",
        )
        .unwrap_err()
        .is_validation());
        assert!(Budget::new("Food", too_big).is_err());
    }

    #[test]
    fn test_overflowing_spend_is_an_error() {
        let mut a = txn(TransactionKind::Expense, 100, "Food");
        let mut b = txn(TransactionKind::Expense, 100, "Food");
        a.amount = Money::from_minor(i64::MAX / 2 + 1);
        b.amount = Money::from_minor(i64::MAX / 2 + 1);

        let err = evaluate(&[a, b], &[budget("Food", 10_000)]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
