//! Investment holding model (one line of the portfolio)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::HoldingId;
use super::money::Money;
use super::{require_label, require_non_negative, require_positive};
use crate::error::{FinanceError, FinanceResult};

/// Self-assessed risk of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(FinanceError::Validation(format!(
                "Unknown risk level '{}' (expected low, medium or high)",
                other
            ))),
        }
    }
}

/// Units of a fund or stock bought at one price and valued at another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub id: HoldingId,
    pub name: String,
    pub units: f64,
    pub buy_price: Money,
    pub current_price: Money,
    #[serde(default)]
    pub risk: RiskLevel,
    pub date: NaiveDate,
}

impl Holding {
    pub fn new(
        name: impl Into<String>,
        units: f64,
        buy_price: Money,
        current_price: Money,
        date: NaiveDate,
    ) -> FinanceResult<Self> {
        if !units.is_finite() || units <= 0.0 {
            return Err(FinanceError::Validation(format!(
                "Units must be a positive number, got {}",
                units
            )));
        }
        Ok(Self {
            id: HoldingId::new(),
            name: require_label(name, "Investment name")?,
            units,
            buy_price: require_positive(buy_price, "Buy price")?,
            current_price: require_non_negative(current_price, "Current price")?,
            risk: RiskLevel::default(),
            date,
        })
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_holding_defaults_to_medium_risk() {
        let h = Holding::new("Index Fund", 10.0, Money::from_major(100), Money::from_major(120), today())
            .unwrap();
        assert_eq!(h.risk, RiskLevel::Medium);
        assert_eq!(h.with_risk(RiskLevel::High).risk, RiskLevel::High);
    }

    #[test]
    fn test_rejects_invalid_holding() {
        let p = Money::from_major(100);
        assert!(Holding::new("X", 0.0, p, p, today()).is_err());
        assert!(Holding::new("X", f64::NAN, p, p, today()).is_err());
        assert!(Holding::new("X", 1.0, Money::zero(), p, today()).is_err());
        assert!(Holding::new("X", 1.0, p, Money::from_minor(-1), today()).is_err());
        assert!(Holding::new("", 1.0, p, p, today()).is_err());
    }

    #[test]
    fn test_risk_parse() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("extreme".parse::<RiskLevel>().is_err());
    }
}
