//! Dashboard, report and history commands

use std::path::Path;

use tracing::info;

use super::{parse_month_or_current, today};
use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_spending};
use crate::error::FinanceResult;
use crate::reports::{FinancialReport, MonthlySummary, SpendingBreakdown};
use crate::storage::Storage;

/// Show the monthly dashboard: totals for the month plus spending by category
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> FinanceResult<()> {
    let month = parse_month_or_current(month.as_deref())?;
    let snapshot = storage.snapshot()?;
    let symbol = settings.currency_symbol.as_str();

    let summary = MonthlySummary::generate(&snapshot, month);
    println!("{}", format_dashboard(&summary, symbol));

    let in_month: Vec<_> = snapshot
        .transactions
        .iter()
        .filter(|t| t.in_month(month))
        .cloned()
        .collect();
    println!("{}", format_spending(&SpendingBreakdown::generate(&in_month), symbol));

    Ok(())
}

/// Print the financial report, or write it to `output`
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    output: Option<&Path>,
) -> FinanceResult<()> {
    let snapshot = storage.snapshot()?;
    let report = FinancialReport::generate(&snapshot, today());
    let text = report.render(&settings.currency_symbol);

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!(path = %path.display(), "Wrote financial report");
            println!("Report written to {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Show the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> FinanceResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
