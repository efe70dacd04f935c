//! Split a salary into needs, wants and savings

use serde::Serialize;

use crate::models::{Money, SalaryPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryAllocation {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl SalaryAllocation {
    pub fn total(&self) -> Money {
        self.needs + self.wants + self.savings
    }
}

/// Allocate the plan's salary by its percentages
///
/// Needs and wants are rounded to the nearest minor unit; savings takes the
/// remainder so the parts always add up to the salary exactly.
pub fn allocate(plan: &SalaryPlan) -> SalaryAllocation {
    let share = |pct: f64| Money::from_f64(plan.amount.to_f64() * pct / 100.0);
    let needs = share(plan.needs_percent);
    let wants = share(plan.wants_percent);
    SalaryAllocation {
        needs,
        wants,
        savings: plan.amount - needs - wants,
    }
}
