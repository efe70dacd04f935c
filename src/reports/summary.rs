//! Plain-text financial report
//!
//! All-time totals and record counts, suitable for saving to a file.

use chrono::NaiveDate;

use crate::models::{FinanceSnapshot, Money};

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReport {
    pub generated_on: NaiveDate,
    pub total_income: Money,
    pub total_expenses: Money,
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    pub investment_count: usize,
    pub loan_count: usize,
}

impl FinancialReport {
    pub fn generate(snapshot: &FinanceSnapshot, generated_on: NaiveDate) -> Self {
        let (total_income, total_expenses) = snapshot.transactions.iter().fold(
            (Money::zero(), Money::zero()),
            |(income, expenses), txn| {
                if txn.is_income() {
                    (income + txn.amount, expenses)
                } else {
                    (income, expenses + txn.amount)
                }
            },
        );

        Self {
            generated_on,
            total_income,
            total_expenses,
            transaction_count: snapshot.transactions.len(),
            budget_count: snapshot.budgets.len(),
            goal_count: snapshot.goals.len(),
            investment_count: snapshot.holdings.len(),
            loan_count: snapshot.loans.len(),
        }
    }

    pub fn net_savings(&self) -> Money {
        self.total_income - self.total_expenses
    }

    /// Render the report as text, formatting amounts with `symbol`
    pub fn render(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("FINANCIAL REPORT\n");
        output.push_str(&format!("Generated: {}\n\n", self.generated_on));

        output.push_str("SUMMARY\n");
        output.push_str(&format!(
            "Total Income: {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Savings: {}\n\n",
            self.net_savings().format_with_symbol(symbol)
        ));

        output.push_str(&format!("TRANSACTIONS: {}\n", self.transaction_count));
        output.push_str(&format!("BUDGETS: {}\n", self.budget_count));
        output.push_str(&format!("GOALS: {}\n", self.goal_count));
        output.push_str(&format!("INVESTMENTS: {}\n", self.investment_count));
        output.push_str(&format!("LOANS: {}\n", self.loan_count));

        output
    }
}
