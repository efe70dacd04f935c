//! Budget display formatting

use tabled::Tabled;

use super::report::{format_bar, format_percentage, table};
use crate::calc::{BudgetStatus, BudgetUtilization};
use crate::models::{Budget, YearMonth};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Budget")]
    amount: String,
}

pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.".to_string();
    }

    table(budgets.iter().map(|b| BudgetRow {
        category: b.category.clone(),
        amount: b.amount.format_with_symbol(symbol),
    }))
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "OK",
        BudgetStatus::Warning => "WARNING",
        BudgetStatus::Exceeded => "EXCEEDED",
    }
}

/// Format budget utilisation for a month
pub fn format_budget_status(lines: &[BudgetUtilization], month: YearMonth, symbol: &str) -> String {
    if lines.is_empty() {
        return "No budgets set.".to_string();
    }

    let mut output = format!("Budget status for {}\n", month);
    output.push_str(&table(lines.iter().map(|line| StatusRow {
        category: line.category.clone(),
        budgeted: line.budgeted.format_with_symbol(symbol),
        spent: line.spent.format_with_symbol(symbol),
        remaining: line.remaining.format_with_symbol(symbol),
        used: format_percentage(line.utilization_percent),
        bar: format_bar(line.display_percent(), 100.0, 10),
        status: status_label(line.status).to_string(),
    })));

    let warnings = lines
        .iter()
        .filter(|l| l.status != BudgetStatus::Ok)
        .count();
    if warnings > 0 {
        output.push_str(&format!("\n{} budget(s) need attention.", warnings));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_status_flags_exceeded() {
        let line = BudgetUtilization {
            category: "Food".into(),
            budgeted: Money::from_major(100),
            spent: Money::from_major(120),
            remaining: Money::from_major(-20),
            utilization_percent: 120.0,
            status: BudgetStatus::Exceeded,
        };

        let output = format_budget_status(&[line], YearMonth::new(2025, 3).unwrap(), "₹");
        assert!(output.starts_with("Budget status for 2025-03"));
        assert!(output.contains("EXCEEDED"));
        assert!(output.contains("-₹20.00"));
        assert!(output.contains("120%"));
        assert!(output.ends_with("1 budget(s) need attention."));
    }

    #[test]
    fn test_budget_list() {
        let budgets = vec![Budget::new("Rent", Money::from_major(15_000)).unwrap()];
        let output = format_budget_list(&budgets, "₹");
        assert!(output.contains("Rent"));
        assert!(output.contains("₹15000.00"));
        assert_eq!(format_budget_list(&[], "₹"), "No budgets set.");
    }
}
