//! Budget model
//!
//! A monthly spending cap for one category label.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::{require_label, require_positive};
use crate::error::FinanceResult;

/// A monthly cap on spending in a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category label this budget applies to
    pub category: String,

    /// Monthly cap
    pub amount: Money,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a validated budget
    pub fn new(category: impl Into<String>, amount: Money) -> FinanceResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: BudgetId::new(),
            category: require_label(category, "Budget category")?,
            amount: require_positive(amount, "Budget amount")?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Change the monthly cap
    pub fn set_amount(&mut self, amount: Money) -> FinanceResult<()> {
        self.amount = require_positive(amount, "Budget amount")?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(" Groceries ", Money::from_major(5000)).unwrap();
        assert_eq!(budget.category, "Groceries");
        assert_eq!(budget.to_string(), "Groceries: ₹5000.00 per month");
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(Budget::new("Food", Money::zero()).unwrap_err().is_validation());
        assert!(Budget::new("Food", Money::from_minor(-1)).is_err());
        assert!(Budget::new("", Money::from_major(1)).is_err());
    }

    #[test]
    fn test_set_amount() {
        let mut budget = Budget::new("Food", Money::from_major(100)).unwrap();
        budget.set_amount(Money::from_major(150)).unwrap();
        assert_eq!(budget.amount, Money::from_major(150));
        assert!(budget.set_amount(Money::zero()).is_err());
        assert_eq!(budget.amount, Money::from_major(150));
    }
}
