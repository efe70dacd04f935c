//! Goal service

use crate::audit::EntityType;
use crate::calc::goal::{plan, GoalPlan};
use crate::error::FinanceResult;
use crate::models::{Goal, Money};
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(
        &self,
        name: &str,
        target: Money,
        current: Money,
        horizon_months: u32,
        annual_rate_percent: f64,
    ) -> FinanceResult<Goal> {
        let goal = Goal::new(name, target, current, horizon_months, annual_rate_percent)?;

        self.storage.goals.insert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Every goal with its contribution plan
    pub fn list_with_plans(&self) -> FinanceResult<Vec<(Goal, GoalPlan)>> {
        self.storage
            .goals
            .get_all()?
            .into_iter()
            .map(|goal| {
                let plan = plan(&goal)?;
                Ok((goal, plan))
            })
            .collect()
    }

    /// Record how much has been saved towards a goal
    pub fn update_progress(&self, id: &str, current: Money) -> FinanceResult<Goal> {
        let mut goal = self.storage.goals.resolve(id)?;
        let before = goal.clone();
        goal.set_current_amount(current)?;

        self.storage.goals.update(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
        )?;

        Ok(goal)
    }

    pub fn delete(&self, id: &str) -> FinanceResult<Goal> {
        let goal = self.storage.goals.resolve(id)?;

        self.storage.goals.remove(goal.id)?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }
}
