//! Transaction display formatting

use tabled::Tabled;

use super::report::{table, truncate};
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, in the order given
pub fn format_transaction_list(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: txn.kind.to_string(),
        category: txn.category.clone(),
        description: truncate(&txn.description, 30),
        amount: if txn.is_expense() {
            format!("-{}", txn.amount.format_with_symbol(symbol))
        } else {
            txn.amount.format_with_symbol(symbol)
        },
    });

    table(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_list_shows_sign_and_date_format() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(25_050),
            "Food",
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            "Dinner",
        )
        .unwrap();

        let output = format_transaction_list(&[txn.clone()], "₹", "%d/%m/%Y");
        assert!(output.contains("14/02/2025"));
        assert!(output.contains("-₹250.50"));
        assert!(output.contains(&txn.id.to_string()));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], "₹", "%Y-%m-%d"),
            "No transactions found."
        );
    }
}
