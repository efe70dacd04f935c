//! Monthly dashboard figures

use crate::models::{FinanceSnapshot, Money, YearMonth};

/// Income, spending and budget headroom for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub income: Money,
    pub expenses: Money,
    /// Sum of every monthly budget
    pub total_budget: Money,
    /// Total budget minus this month's expenses; negative when overspent
    pub budget_remaining: Money,
    pub transaction_count: usize,
}

impl MonthlySummary {
    pub fn generate(snapshot: &FinanceSnapshot, month: YearMonth) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();
        let mut transaction_count = 0;

        for txn in snapshot.transactions.iter().filter(|t| t.in_month(month)) {
            transaction_count += 1;
            if txn.is_income() {
                income += txn.amount;
            } else {
                expenses += txn.amount;
            }
        }

        let total_budget: Money = snapshot.budgets.iter().map(|b| b.amount).sum();

        Self {
            month,
            income,
            expenses,
            total_budget,
            budget_remaining: total_budget - expenses,
            transaction_count,
        }
    }

    /// Income left after this month's spending
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}
