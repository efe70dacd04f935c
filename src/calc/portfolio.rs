//! Investment returns for single holdings and the whole portfolio

use serde::Serialize;

use crate::models::Holding;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingPerformance {
    pub name: String,
    pub invested: f64,
    pub current_value: f64,
    pub gain: f64,
    pub returns_percent: f64,
}

pub fn performance(holding: &Holding) -> HoldingPerformance {
    let invested = holding.units * holding.buy_price.to_f64();
    let current_value = holding.units * holding.current_price.to_f64();
    let gain = current_value - invested;
    HoldingPerformance {
        name: holding.name.clone(),
        invested,
        current_value,
        gain,
        returns_percent: percent_of(gain, invested),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub name: String,
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub holdings: Vec<HoldingPerformance>,
    pub total_invested: f64,
    pub total_value: f64,
    pub total_gain: f64,
    pub returns_percent: f64,

    /// Each holding's share of the current portfolio value
    pub allocation: Vec<AllocationSlice>,
}

pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let holdings: Vec<_> = holdings.iter().map(performance).collect();
    let total_invested: f64 = holdings.iter().map(|h| h.invested).sum();
    let total_value: f64 = holdings.iter().map(|h| h.current_value).sum();
    let total_gain = total_value - total_invested;

    let allocation = holdings
        .iter()
        .map(|h| AllocationSlice {
            name: h.name.clone(),
            share_percent: percent_of(h.current_value, total_value),
        })
        .collect();

    PortfolioSummary {
        holdings,
        total_invested,
        total_value,
        total_gain,
        returns_percent: percent_of(total_gain, total_invested),
        allocation,
    }
}

/// `part / whole * 100`, or 0 when there is no whole
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
