//! Goal funding plan
//!
//! How much to invest each month (SIP) to close the gap between what a goal
//! has and what it needs, and how far along it is.

use serde::Serialize;

use super::annuity::required_contribution;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalPlan {
    /// Target minus current; negative when over-funded
    pub remaining: Money,

    /// Monthly SIP needed to reach the target within the horizon
    pub required_monthly_contribution: f64,

    /// current / target * 100, unclamped so over-funding is visible
    pub progress_percent: f64,
}

impl GoalPlan {
    /// Progress clamped to 0..=100 for progress bars
    pub fn display_progress_percent(&self) -> f64 {
        self.progress_percent.clamp(0.0, 100.0)
    }

    pub fn is_met(&self) -> bool {
        !self.remaining.is_positive()
    }
}

/// Plan the monthly contribution for a goal
///
/// A goal that is already met needs nothing more, so its contribution is
/// exactly zero rather than the (negative) annuity inverse of the surplus.
pub fn plan(goal: &Goal) -> FinanceResult<GoalPlan> {
    if !goal.target_amount.is_positive() {
        return Err(FinanceError::InvalidInput(format!(
            "goal '{}' has non-positive target {}",
            goal.name, goal.target_amount
        )));
    }
    if goal.horizon_months == 0 {
        return Err(FinanceError::InvalidInput(format!(
            "goal '{}' has no months left to save",
            goal.name
        )));
    }

    let remaining = goal.remaining();
    let required_monthly_contribution = if remaining.is_positive() {
        required_contribution(
            remaining.to_f64(),
            goal.expected_annual_rate_percent,
            goal.horizon_months,
        )?
    } else {
        0.0
    };

    Ok(GoalPlan {
        remaining,
        required_monthly_contribution,
        progress_percent: goal.current_amount.minor() as f64 * 100.0
            / goal.target_amount.minor() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::annuity::sip_maturity;

    fn goal(target: i64, current: i64, months: u32, rate: f64) -> Goal {
        Goal::new(
            "Goal",
            Money::from_major(target),
            Money::from_major(current),
            months,
            rate,
        )
        .unwrap()
    }

    #[test]
    fn test_reference_goal() {
        let plan = plan(&goal(120_000, 20_000, 24, 12.0)).unwrap();

        assert_eq!(plan.remaining, Money::from_major(100_000));
        assert!((plan.required_monthly_contribution - 3_670.64).abs() < 0.01);
        let reached = sip_maturity(plan.required_monthly_contribution, 12.0, 24).unwrap();
        assert!((reached - 100_000.0).abs() < 1e-6);

        assert!((plan.progress_percent - 16.666_666).abs() < 1e-5);
        assert!(!plan.is_met());
    }

    #[test]
    fn test_met_goal_needs_nothing() {
        let exact = plan(&goal(50_000, 50_000, 12, 10.0)).unwrap();
        assert_eq!(exact.required_monthly_contribution, 0.0);
        assert!(exact.is_met());
        assert_eq!(exact.progress_percent, 100.0);

        let over = plan(&goal(50_000, 75_000, 12, 10.0)).unwrap();
        assert_eq!(over.required_monthly_contribution, 0.0);
        assert_eq!(over.progress_percent, 150.0);
        assert_eq!(over.display_progress_percent(), 100.0);
    }

    #[test]
    fn test_zero_rate_goal() {
        let plan = plan(&goal(12_000, 0, 12, 0.0)).unwrap();
        assert_eq!(plan.required_monthly_contribution, 1_000.0);
        assert_eq!(plan.progress_percent, 0.0);
    }

    #[test]
    fn test_invalid_goal_records_are_rejected() {
        let mut broken = goal(1_000, 0, 12, 8.0);
        broken.target_amount = Money::zero();
        assert!(plan(&broken).unwrap_err().is_invalid_input());

        let mut no_time = goal(1_000, 0, 12, 8.0);
        no_time.horizon_months = 0;
        assert!(plan(&no_time).unwrap_err().is_invalid_input());
    }
}
