//! Spending Breakdown
//!
//! Totals expenses per category, largest first, with each category's share of
//! all spending.

use crate::models::{Money, Transaction};
use std::collections::HashMap;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of total spending
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBreakdown {
    pub categories: Vec<CategorySpending>,
    pub total_spending: Money,
}

impl SpendingBreakdown {
    /// Build the breakdown from whichever transactions the caller selected
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let entry = by_category
                .entry(txn.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total_spending: Money = by_category.values().map(|(total, _)| *total).sum();

        let mut categories: Vec<_> = by_category
            .into_iter()
            .map(|(category, (total, count))| CategorySpending {
                category: category.to_string(),
                total,
                transaction_count: count,
                percentage: if total_spending.is_zero() {
                    0.0
                } else {
                    total.minor() as f64 * 100.0 / total_spending.minor() as f64
                },
            })
            .collect();

        // Most spending first, ties by name so the order is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            categories,
            total_spending,
        }
    }

    pub fn top_categories(&self, limit: usize) -> &[CategorySpending] {
        &self.categories[..limit.min(self.categories.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, major: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::from_major(major),
            category,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_breakdown() {
        let txns = vec![
            txn(TransactionKind::Expense, 300, "Food"),
            txn(TransactionKind::Expense, 500, "Rent"),
            txn(TransactionKind::Expense, 200, "Food"),
            txn(TransactionKind::Income, 9_000, "Salary"),
        ];
        let report = SpendingBreakdown::generate(&txns);

        assert_eq!(report.total_spending, Money::from_major(1_000));
        assert_eq!(report.categories.len(), 2);
        // Tie at 500 is broken alphabetically
        assert_eq!(report.categories[0].category, "Food");
        assert_eq!(report.categories[0].transaction_count, 2);
        assert_eq!(report.categories[0].percentage, 50.0);
        assert_eq!(report.categories[1].category, "Rent");
        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(10).len(), 2);
    }

    #[test]
    fn test_no_expenses() {
        let report = SpendingBreakdown::generate(&[txn(TransactionKind::Income, 10, "Pay")]);
        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
    }
}
