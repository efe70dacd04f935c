//! Investment portfolio display formatting

use tabled::Tabled;

use super::report::{format_amount, format_percentage, table};
use crate::calc::portfolio::PortfolioSummary;
use crate::models::Holding;

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Investment")]
    name: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Returns")]
    returns: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

/// `holdings` and `summary.holdings` must be in the same order
pub fn format_portfolio(holdings: &[Holding], summary: &PortfolioSummary, symbol: &str) -> String {
    if holdings.is_empty() {
        return "No investments yet.".to_string();
    }

    let rows = holdings
        .iter()
        .zip(&summary.holdings)
        .zip(&summary.allocation)
        .map(|((holding, perf), slice)| HoldingRow {
            id: holding.id.to_string(),
            name: holding.name.clone(),
            units: format!("{}", holding.units),
            invested: format_amount(perf.invested, symbol),
            value: format_amount(perf.current_value, symbol),
            returns: format_percentage(perf.returns_percent),
            share: format_percentage(slice.share_percent),
            risk: holding.risk.to_string(),
        });

    let mut output = table(rows);
    output.push_str(&format!(
        "\nTotal invested: {}  Current value: {}  Gain: {} ({})",
        format_amount(summary.total_invested, symbol),
        format_amount(summary.total_value, symbol),
        format_amount(summary.total_gain, symbol),
        format_percentage(summary.returns_percent),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::portfolio::summarize;
    use crate::models::{Money, RiskLevel};
    use chrono::NaiveDate;

    #[test]
    fn test_portfolio_totals() {
        let holdings = vec![Holding::new(
            "Index Fund",
            4.0,
            Money::from_major(250),
            Money::from_major(300),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()
        .with_risk(RiskLevel::Low)];

        let output = format_portfolio(&holdings, &summarize(&holdings), "₹");
        assert!(output.contains("Index Fund"));
        assert!(output.contains("Low"));
        assert!(output.ends_with("Total invested: ₹1000.00  Current value: ₹1200.00  Gain: ₹200.00 (20%)"));
    }
}
