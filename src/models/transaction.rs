//! Transaction model
//!
//! Income and expense records, the raw material for budgets, the dashboard
//! and the spending breakdown.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::{require_label, require_positive};
use crate::error::{FinanceError, FinanceResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(FinanceError::Validation(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

/// A single income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount, always positive; direction comes from `kind`
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Short description
    pub description: String,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a validated transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> FinanceResult<Self> {
        Ok(Self {
            id: TransactionId::new(),
            kind,
            amount: require_positive(amount, "Transaction amount")?,
            category: require_label(category, "Transaction category")?,
            date,
            description: require_label(description, "Transaction description")?,
            notes: None,
            created_at: Utc::now(),
        })
    }

    /// Attach notes, dropping blank ones
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes.trim().to_string())
        };
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check whether the transaction falls in the given calendar month
    pub fn in_month(&self, month: YearMonth) -> bool {
        self.date.year() == month.year && self.date.month() == month.month
    }

    /// Re-check the constructor invariants (used on data loaded from disk)
    pub fn validate(&self) -> FinanceResult<()> {
        require_positive(self.amount, "Transaction amount")?;
        require_label(self.category.as_str(), "Transaction category")?;
        require_label(self.description.as_str(), "Transaction description")?;
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) {}",
            self.date, self.kind, self.amount, self.category, self.description
        )
    }
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> FinanceResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(FinanceError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FinanceError::Validation(format!("Invalid month '{}' (expected YYYY-MM)", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Listing filters for transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub month: Option<YearMonth>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(month) = self.month {
            if !txn.in_month(month) {
                return false;
            }
        }
        true
    }

    /// Filter and sort newest first
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut matched: Vec<_> = transactions.iter().filter(|t| self.matches(t)).collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_major(amount),
            category,
            on,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_major(50000),
            "Salary",
            date(2025, 1, 1),
            "January salary",
        )
        .unwrap()
        .with_notes("  bonus included ");

        assert!(txn.is_income());
        assert_eq!(txn.notes.as_deref(), Some("bonus included"));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_input() {
        let on = date(2025, 1, 1);
        let kind = TransactionKind::Expense;
        assert!(Transaction::new(kind, Money::zero(), "Food", on, "x")
            .unwrap_err()
            .is_validation());
        assert!(Transaction::new(kind, Money::from_minor(-100), "Food", on, "x").is_err());
        assert!(Transaction::new(kind, Money::from_minor(100), "  ", on, "x").is_err());
        assert!(Transaction::new(kind, Money::from_minor(100), "Food", on, "").is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn test_year_month() {
        let ym: YearMonth = "2025-03".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2025, month: 3 });
        assert_eq!(ym.to_string(), "2025-03");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_filter_and_sort() {
        let txns = vec![
            expense(100, "Food", date(2025, 3, 2)),
            expense(200, "Rent", date(2025, 3, 1)),
            expense(300, "Food", date(2025, 4, 5)),
            Transaction::new(
                TransactionKind::Income,
                Money::from_major(1000),
                "Salary",
                date(2025, 3, 31),
                "pay",
            )
            .unwrap(),
        ];

        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            category: None,
            month: Some("2025-03".parse().unwrap()),
        };
        let matched = filter.apply(&txns);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].category, "Food");
        assert_eq!(matched[1].category, "Rent");

        let food = TransactionFilter {
            category: Some("Food".into()),
            ..Default::default()
        };
        let matched = food.apply(&txns);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].date, date(2025, 4, 5));
    }
}
