//! Shared-expense group service

use crate::audit::EntityType;
use crate::calc::ledger::{settle, GroupBalances};
use crate::error::FinanceResult;
use crate::models::{Group, GroupExpense, MemberId, Money};
use crate::storage::Storage;

pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a group from a comma-separated member list
    pub fn create(&self, name: &str, members: &str) -> FinanceResult<Group> {
        let group = Group::new(name, Group::parse_members(members)?)?;

        self.storage.groups.insert(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        )?;

        Ok(group)
    }

    pub fn list(&self) -> FinanceResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Record an expense paid by one member on behalf of the group
    pub fn add_expense(
        &self,
        group: &str,
        paid_by: &str,
        amount: Money,
        description: &str,
    ) -> FinanceResult<(Group, GroupExpense)> {
        let mut group = self.storage.groups.resolve(group)?;
        let before = group.clone();

        let expense = GroupExpense::new(description, amount, MemberId::new(paid_by)?)?;
        let expense = group.add_expense(expense)?.clone();

        self.storage.groups.update(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_update(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &before,
            &group,
        )?;

        Ok((group, expense))
    }

    /// Net balance of each member of the group
    pub fn balances(&self, group: &str) -> FinanceResult<(Group, GroupBalances)> {
        let group = self.storage.groups.resolve(group)?;
        let balances = settle(&group)?;
        Ok((group, balances))
    }

    pub fn delete(&self, group: &str) -> FinanceResult<Group> {
        let group = self.storage.groups.resolve(group)?;

        self.storage.groups.remove(group.id)?;
        self.storage.groups.save()?;

        self.storage.log_delete(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        )?;

        Ok(group)
    }
}
