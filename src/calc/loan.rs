//! Loan repayment figures derived from a loan's terms

use serde::Serialize;

use super::annuity::{emi, loan_quote, monthly_rate, LoanQuote};
use crate::error::FinanceResult;
use crate::models::{Loan, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSummary {
    pub quote: LoanQuote,

    /// Principal already paid back
    pub repaid: Money,

    /// Share of the principal paid back, 0..=100
    pub repaid_percent: f64,
}

pub fn summarize(loan: &Loan) -> FinanceResult<LoanSummary> {
    let quote = loan_quote(
        loan.principal.to_f64(),
        loan.annual_rate_percent,
        loan.tenure_months,
    )?;

    let repaid = if loan.outstanding >= loan.principal {
        Money::zero()
    } else {
        loan.principal - loan.outstanding
    };
    let repaid_percent =
        (repaid.minor() as f64 * 100.0 / loan.principal.minor() as f64).clamp(0.0, 100.0);

    Ok(LoanSummary {
        quote,
        repaid,
        repaid_percent,
    })
}

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Month-by-month split of each EMI into interest and principal
///
/// The final row pays off whatever float drift is left, so the schedule
/// always closes at a zero balance.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> FinanceResult<Vec<AmortizationRow>> {
    let payment = emi(principal, annual_rate_percent, tenure_months)?;
    let r = monthly_rate(annual_rate_percent);

    let mut balance = principal;
    let mut rows = Vec::new();
    for month in 1..=tenure_months {
        let interest = balance * r;
        let (payment, principal_part) = if month == tenure_months {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance -= principal_part;
        if month == tenure_months {
            balance = 0.0;
        }
        rows.push(AmortizationRow {
            month,
            payment,
            interest,
            principal: principal_part,
            balance,
        });
    }
    Ok(rows)
}
