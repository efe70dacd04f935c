//! Dashboard, spending breakdown and salary plan views

use super::report::{double_separator, format_bar, format_percentage, separator};
use crate::calc::salary::SalaryAllocation;
use crate::models::SalaryPlan;
use crate::reports::{MonthlySummary, SpendingBreakdown};

const WIDTH: usize = 60;

pub fn format_dashboard(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Dashboard for {}\n", summary.month));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    let lines = [
        ("Total Income", summary.income),
        ("Total Expenses", summary.expenses),
        ("Net", summary.net()),
        ("Total Budget", summary.total_budget),
        ("Budget Remaining", summary.budget_remaining),
    ];
    for (label, amount) in lines {
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            label,
            amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("Transactions this month: {}\n", summary.transaction_count));
    output
}

pub fn format_spending(breakdown: &SpendingBreakdown, symbol: &str) -> String {
    if breakdown.categories.is_empty() {
        return "No spending recorded.".to_string();
    }

    let mut output = String::from("Spending by category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for cat in &breakdown.categories {
        output.push_str(&format!(
            "{:<18} {:>14} {:>5} {}\n",
            cat.category,
            cat.total.format_with_symbol(symbol),
            format_percentage(cat.percentage),
            format_bar(cat.percentage, 100.0, 20)
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>14}\n",
        "Total",
        breakdown.total_spending.format_with_symbol(symbol)
    ));
    output
}

pub fn format_salary(plan: &SalaryPlan, allocation: &SalaryAllocation, symbol: &str) -> String {
    let mut output = format!("Monthly salary: {}\n", plan.amount.format_with_symbol(symbol));
    for (label, pct, amount) in [
        ("Needs", plan.needs_percent, allocation.needs),
        ("Wants", plan.wants_percent, allocation.wants),
        ("Savings", plan.savings_percent, allocation.savings),
    ] {
        output.push_str(&format!(
            "  {:<8} {:>6} {:>14}\n",
            label,
            format_percentage(pct),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}
