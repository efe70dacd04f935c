//! Salary allocation plan (needs / wants / savings)

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::require_positive;
use crate::error::{FinanceError, FinanceResult};

/// Allowed drift when checking that the split adds up to 100%
const PERCENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPlan {
    /// Monthly take-home salary
    pub amount: Money,
    pub needs_percent: f64,
    pub wants_percent: f64,
    pub savings_percent: f64,
}

impl SalaryPlan {
    pub fn new(
        amount: Money,
        needs_percent: f64,
        wants_percent: f64,
        savings_percent: f64,
    ) -> FinanceResult<Self> {
        let plan = Self {
            amount: require_positive(amount, "Salary")?,
            needs_percent,
            wants_percent,
            savings_percent,
        };
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> FinanceResult<()> {
        for (label, pct) in [
            ("needs", self.needs_percent),
            ("wants", self.wants_percent),
            ("savings", self.savings_percent),
        ] {
            if !pct.is_finite() || pct < 0.0 {
                return Err(FinanceError::Validation(format!(
                    "The {} percentage must be zero or more, got {}",
                    label, pct
                )));
            }
        }
        let total = self.needs_percent + self.wants_percent + self.savings_percent;
        if (total - 100.0).abs() > PERCENT_TOLERANCE {
            return Err(FinanceError::Validation(format!(
                "Percentages must add up to 100%, got {}%",
                total
            )));
        }
        Ok(())
    }
}
