//! Shared-expense settlement
//!
//! Every expense is split equally between all members of the group. The
//! payer is owed the other members' shares; everyone else owes their share.
//! Balances across a group always sum to zero (up to float rounding).

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Group, MemberId, Money};

/// Net position of one member: positive is owed, negative owes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberBalance {
    pub member: MemberId,
    pub balance: f64,
}

impl MemberBalance {
    pub fn is_owed(&self) -> bool {
        self.balance > 0.0
    }
}

/// Net balances of a group, in the group's member order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBalances {
    balances: Vec<MemberBalance>,
}

impl GroupBalances {
    pub fn get(&self, member: &MemberId) -> Option<f64> {
        self.balances
            .iter()
            .find(|b| &b.member == member)
            .map(|b| b.balance)
    }

    /// Sum of every balance; zero for consistent data
    pub fn total(&self) -> f64 {
        self.balances.iter().map(|b| b.balance).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberBalance> {
        self.balances.iter()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

/// Compute each member's net balance under an equal split
pub fn settle(group: &Group) -> FinanceResult<GroupBalances> {
    if group.members.is_empty() {
        return Err(FinanceError::InvalidInput(format!(
            "group '{}' has no members to split between",
            group.name
        )));
    }

    let mut index: HashMap<&MemberId, usize> = HashMap::with_capacity(group.members.len());
    for (i, member) in group.members.iter().enumerate() {
        if index.insert(member, i).is_some() {
            return Err(FinanceError::DataIntegrity(format!(
                "member '{}' appears more than once in group '{}'",
                member, group.name
            )));
        }
    }

    let member_count = group.members.len() as f64;
    let mut balances = vec![0.0_f64; group.members.len()];

    for expense in &group.expenses {
        let payer = *index.get(&expense.paid_by).ok_or_else(|| {
            FinanceError::DataIntegrity(format!(
                "expense '{}' was paid by '{}', who is not a member of group '{}'",
                expense.description, expense.paid_by, group.name
            ))
        })?;

        let amount = expense.amount.to_f64();
        let share = amount / member_count;
        for (i, balance) in balances.iter_mut().enumerate() {
            if i == payer {
                *balance += amount - share;
            } else {
                *balance -= share;
            }
        }
    }

    Ok(GroupBalances {
        balances: group
            .members
            .iter()
            .cloned()
            .zip(balances)
            .map(|(member, balance)| MemberBalance { member, balance })
            .collect(),
    })
}

/// Total of all expenses recorded in the group
pub fn total_expenses(group: &Group) -> Money {
    group.expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupExpense;

    fn member(id: &str) -> MemberId {
        MemberId::new(id).unwrap()
    }

    fn group(members: &[&str], expenses: &[(&str, i64)]) -> Group {
        let mut group = Group::new("Trip", members.iter().map(|m| member(m)).collect()).unwrap();
        for (payer, minor) in expenses {
            group
                .add_expense(
                    GroupExpense::new("expense", Money::from_minor(*minor), member(payer)).unwrap(),
                )
                .unwrap();
        }
        group
    }

    #[test]
    fn test_reference_split() {
        let g = group(&["A", "B", "C"], &[("A", 30_000)]);
        let balances = settle(&g).unwrap();

        assert!((balances.get(&member("A")).unwrap() - 200.0).abs() < 1e-9);
        assert!((balances.get(&member("B")).unwrap() + 100.0).abs() < 1e-9);
        assert!((balances.get(&member("C")).unwrap() + 100.0).abs() < 1e-9);
        assert!(balances.total().abs() < 1e-9);

        let order: Vec<_> = balances.iter().map(|b| b.member.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert!(balances.iter().next().unwrap().is_owed());
    }

    #[test]
    fn test_balances_sum_to_zero() {
        let g = group(
            &["ana", "ben", "cai", "dev", "eli", "fay", "gus"],
            &[
                ("ana", 10_001),
                ("ben", 333),
                ("cai", 1_000_007),
                ("ana", 42),
                ("gus", 99_999),
                ("fay", 1),
            ],
        );
        let balances = settle(&g).unwrap();
        assert_eq!(balances.len(), 7);
        assert!(balances.total().abs() < 1e-6);
        // Nobody paid, so dev owes exactly a seventh of everything
        let expected = -total_expenses(&g).to_f64() / 7.0;
        assert!((balances.get(&member("dev")).unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_single_member_group_balances_to_zero() {
        let g = group(&["solo"], &[("solo", 5_000)]);
        let balances = settle(&g).unwrap();
        assert_eq!(balances.get(&member("solo")), Some(0.0));
    }

    #[test]
    fn test_no_expenses() {
        let balances = settle(&group(&["A", "B"], &[])).unwrap();
        assert!(balances.iter().all(|b| b.balance == 0.0));
    }

    #[test]
    fn test_unknown_payer_is_data_integrity_error() {
        let mut g = group(&["A", "B"], &[]);
        // Bypass add_expense, as data loaded from disk would
        g.expenses
            .push(GroupExpense::new("Taxi", Money::from_major(10), member("Z")).unwrap());
        let err = settle(&g).unwrap_err();
        assert!(err.is_data_integrity());
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn test_duplicate_or_missing_members() {
        let mut g = group(&["A", "B"], &[]);
        g.members.push(member("A"));
        assert!(settle(&g).unwrap_err().is_data_integrity());

        g.members.clear();
        assert!(settle(&g).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_total_expenses() {
        let g = group(&["A", "B", "C"], &[("A", 100), ("B", 250), ("A", 50)]);
        assert_eq!(total_expenses(&g), Money::from_minor(400));
    }
}
