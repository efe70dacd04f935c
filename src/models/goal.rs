//! Savings goal model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::{require_label, require_non_negative, require_positive, require_rate};
use crate::calc::annuity::MAX_TERM_MONTHS;
use crate::error::{FinanceError, FinanceResult};

/// A target amount to reach within a horizon at an expected return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    /// What the goal is for (e.g. "Buy House")
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far; may exceed the target
    pub current_amount: Money,

    /// Months left to reach the target
    pub horizon_months: u32,

    /// Expected annual return, in percent
    pub expected_annual_rate_percent: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a validated goal
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        horizon_months: u32,
        expected_annual_rate_percent: f64,
    ) -> FinanceResult<Self> {
        if horizon_months == 0 || horizon_months > MAX_TERM_MONTHS {
            return Err(FinanceError::Validation(format!(
                "Goal horizon must be between 1 and {} months, got {}",
                MAX_TERM_MONTHS, horizon_months
            )));
        }
        let now = Utc::now();
        Ok(Self {
            id: GoalId::new(),
            name: require_label(name, "Goal name")?,
            target_amount: require_positive(target_amount, "Goal target")?,
            current_amount: require_non_negative(current_amount, "Goal current amount")?,
            horizon_months,
            expected_annual_rate_percent: require_rate(
                expected_annual_rate_percent,
                "Goal expected return",
            )?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Record progress towards the goal
    pub fn set_current_amount(&mut self, amount: Money) -> FinanceResult<()> {
        self.current_amount = require_non_negative(amount, "Goal current amount")?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Amount still missing (negative when over-funded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} in {} months",
            self.name, self.current_amount, self.target_amount, self.horizon_months
        )
    }
}
