//! Shared-expense group display formatting

use tabled::Tabled;

use super::report::{format_amount, table};
use crate::calc::ledger::total_expenses;
use crate::calc::GroupBalances;
use crate::models::Group;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Group")]
    name: String,
    #[tabled(rename = "Members")]
    members: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "Total")]
    total: String,
}

pub fn format_group_list(groups: &[Group], symbol: &str) -> String {
    if groups.is_empty() {
        return "No groups yet.".to_string();
    }

    table(groups.iter().map(|group| GroupRow {
        id: group.id.to_string(),
        name: group.name.clone(),
        members: group
            .members
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        expenses: group.expenses.len(),
        total: total_expenses(group).format_with_symbol(symbol),
    }))
}

/// One line per member: who is owed and who owes
pub fn format_balances(group: &Group, balances: &GroupBalances, symbol: &str) -> String {
    let mut output = format!(
        "Balances for {} (total spent {})\n",
        group.name,
        total_expenses(group).format_with_symbol(symbol)
    );

    for balance in balances.iter() {
        let line = if balance.is_owed() {
            format!("  {} is owed {}\n", balance.member, format_amount(balance.balance, symbol))
        } else if balance.balance < 0.0 {
            format!("  {} owes {}\n", balance.member, format_amount(-balance.balance, symbol))
        } else {
            format!("  {} is settled up\n", balance.member)
        };
        output.push_str(&line);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ledger::settle;
    use crate::models::{GroupExpense, MemberId, Money};

    #[test]
    fn test_balances_text() {
        let members = Group::parse_members("A,B,C,D").unwrap();
        let mut group = Group::new("Trip", members).unwrap();
        let expense =
            GroupExpense::new("Hotel", Money::from_major(300), MemberId::new("A").unwrap()).unwrap();
        group.add_expense(expense).unwrap();
        let expense =
            GroupExpense::new("Taxi", Money::from_major(100), MemberId::new("D").unwrap()).unwrap();
        group.add_expense(expense).unwrap();

        let output = format_balances(&group, &settle(&group).unwrap(), "₹");
        assert!(output.starts_with("Balances for Trip (total spent ₹400.00)"));
        assert!(output.contains("A is owed ₹200.00"));
        assert!(output.contains("B owes ₹100.00"));
        assert!(output.contains("D is settled up"));
    }

    #[test]
    fn test_group_list() {
        let group = Group::new("Flat", Group::parse_members("x,y").unwrap()).unwrap();
        let output = format_group_list(&[group], "₹");
        assert!(output.contains("x, y"));
        assert!(output.contains("₹0.00"));
    }
}
