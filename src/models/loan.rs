//! Loan model
//!
//! Stores the terms of a loan and what is left to repay. The monthly
//! installment is always derived from the terms (see `calc::loan`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::LoanId;
use super::money::Money;
use super::{require_label, require_non_negative, require_positive, require_rate};
use crate::calc::annuity::MAX_TERM_MONTHS;
use crate::error::{FinanceError, FinanceResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub name: String,

    /// Amount borrowed
    pub principal: Money,

    /// Annual interest rate, in percent
    pub annual_rate_percent: f64,

    /// Repayment term in months
    pub tenure_months: u32,

    /// Balance still owed
    pub outstanding: Money,

    pub created_at: DateTime<Utc>,
}

impl Loan {
    /// Create a validated loan; a fresh loan has the full principal outstanding
    pub fn new(
        name: impl Into<String>,
        principal: Money,
        annual_rate_percent: f64,
        tenure_months: u32,
    ) -> FinanceResult<Self> {
        if tenure_months == 0 || tenure_months > MAX_TERM_MONTHS {
            return Err(FinanceError::Validation(format!(
                "Loan tenure must be between 1 and {} months, got {}",
                MAX_TERM_MONTHS, tenure_months
            )));
        }
        let principal = require_positive(principal, "Loan principal")?;
        Ok(Self {
            id: LoanId::new(),
            name: require_label(name, "Loan name")?,
            principal,
            annual_rate_percent: require_rate(annual_rate_percent, "Loan interest rate")?,
            tenure_months,
            outstanding: principal,
            created_at: Utc::now(),
        })
    }

    /// Set the outstanding balance
    pub fn with_outstanding(mut self, outstanding: Money) -> FinanceResult<Self> {
        self.outstanding = require_non_negative(outstanding, "Loan outstanding balance")?;
        Ok(self)
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}% for {} months",
            self.name, self.principal, self.annual_rate_percent, self.tenure_months
        )
    }
}
