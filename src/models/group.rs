//! Shared-expense group model
//!
//! A group is a fixed list of members plus the expenses any of them paid on
//! behalf of everyone. Balances are derived in `calc::ledger`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::{ExpenseId, GroupId};
use super::money::Money;
use super::{require_label, require_positive};
use crate::error::{FinanceError, FinanceResult};

/// Identifier of a group member (a name or handle, never empty)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> FinanceResult<Self> {
        Ok(Self(require_label(id, "Member identifier")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expense paid by one member and shared by the whole group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupExpense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub paid_by: MemberId,
    pub created_at: DateTime<Utc>,
}

impl GroupExpense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        paid_by: MemberId,
    ) -> FinanceResult<Self> {
        Ok(Self {
            id: ExpenseId::new(),
            description: require_label(description, "Expense description")?,
            amount: require_positive(amount, "Expense amount")?,
            paid_by,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<MemberId>,
    #[serde(default)]
    pub expenses: Vec<GroupExpense>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a group; members must be non-empty and unique
    pub fn new(name: impl Into<String>, members: Vec<MemberId>) -> FinanceResult<Self> {
        if members.is_empty() {
            return Err(FinanceError::Validation(
                "A group needs at least one member".into(),
            ));
        }
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member) {
                return Err(FinanceError::Validation(format!(
                    "Member '{}' is listed twice",
                    member
                )));
            }
        }
        Ok(Self {
            id: GroupId::new(),
            name: require_label(name, "Group name")?,
            members,
            expenses: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Parse a comma-separated member list ("alice, bob,carol")
    pub fn parse_members(list: &str) -> FinanceResult<Vec<MemberId>> {
        list.split(',').map(MemberId::new).collect()
    }

    pub fn is_member(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }

    /// Record an expense; the payer must belong to the group
    pub fn add_expense(&mut self, expense: GroupExpense) -> FinanceResult<&GroupExpense> {
        if !self.is_member(&expense.paid_by) {
            return Err(FinanceError::Validation(format!(
                "'{}' is not a member of group '{}'",
                expense.paid_by, self.name
            )));
        }
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} members)", self.name, self.members.len())
    }
}
