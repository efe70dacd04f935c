//! Read-only view of a user's data
//!
//! Calculations and reports receive a `FinanceSnapshot` (or slices of it)
//! instead of reaching into storage, so every derived number is a function of
//! exactly the data passed in.

use serde::{Deserialize, Serialize};

use super::{Budget, Goal, Group, Habit, Holding, Loan, SalaryPlan, Transaction};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub salary: Option<SalaryPlan>,
}

impl FinanceSnapshot {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
            && self.loans.is_empty()
            && self.groups.is_empty()
            && self.holdings.is_empty()
            && self.habits.is_empty()
            && self.salary.is_none()
    }
}
