//! Annuity formulas: loan EMI, SIP maturity and the contribution needed to
//! reach a future value.
//!
//! Rates are annual percentages and are converted to a monthly fraction
//! (`rate / 100 / 12`) before use. At a zero rate every formula divides zero
//! by zero, so each has a closed-form fallback (`P / n`, `C * m`, `V / m`).

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};

/// Longest loan tenure or investment horizon accepted (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Convert an annual percentage rate to a monthly fractional rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Equal monthly installment that repays `principal` over `tenure_months`
///
/// # Examples
/// ```
/// use financehub::calc::annuity::emi;
/// let payment = emi(100_000.0, 10.0, 12).unwrap();
/// assert!((payment - 8791.59).abs() < 0.01);
/// assert_eq!(emi(1200.0, 0.0, 12).unwrap(), 100.0);
/// ```
pub fn emi(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> FinanceResult<f64> {
    check_positive(principal, "principal")?;
    check_periods(tenure_months, "tenure")?;
    check_rate(annual_rate_percent)?;

    if annual_rate_percent == 0.0 {
        return Ok(principal / f64::from(tenure_months));
    }

    // P·r / (1 - (1+r)^-n), with the discount term kept accurate for tiny r
    let r = monthly_rate(annual_rate_percent);
    let discounted = -(-f64::from(tenure_months) * r.ln_1p()).exp_m1();
    ensure_finite(principal * r / discounted, "EMI")
}

/// Future value of contributing `monthly_contribution` at the start of each
/// month for `months`
pub fn sip_maturity(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    months: u32,
) -> FinanceResult<f64> {
    if !monthly_contribution.is_finite() || monthly_contribution < 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "contribution must be zero or more, got {}",
            monthly_contribution
        )));
    }
    check_periods(months, "duration")?;
    check_rate(annual_rate_percent)?;

    let factor = annuity_due_factor(annual_rate_percent, months)?;
    ensure_finite(monthly_contribution * factor, "SIP maturity value")
}

/// Monthly contribution needed for the SIP to grow to `target_future_value`
///
/// This is the inverse of [`sip_maturity`] for the same rate and months.
pub fn required_contribution(
    target_future_value: f64,
    annual_rate_percent: f64,
    months: u32,
) -> FinanceResult<f64> {
    check_positive(target_future_value, "target")?;
    check_periods(months, "duration")?;
    check_rate(annual_rate_percent)?;

    let factor = annuity_due_factor(annual_rate_percent, months)?;
    ensure_finite(target_future_value / factor, "required contribution")
}

/// `((1+r)^m - 1) / r * (1+r)`, or `m` at a zero rate
///
/// The growth term is `expm1(m·ln(1+r))` so it does not cancel to zero when
/// `1 + r` rounds to 1.
fn annuity_due_factor(annual_rate_percent: f64, months: u32) -> FinanceResult<f64> {
    if annual_rate_percent == 0.0 {
        return Ok(f64::from(months));
    }
    let r = monthly_rate(annual_rate_percent);
    let growth = (f64::from(months) * r.ln_1p()).exp_m1();
    let factor = growth / r * (1.0 + r);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "{}% over {} months is outside the computable range",
            annual_rate_percent, months
        )));
    }
    Ok(factor)
}

/// Result of the EMI calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanQuote {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// EMI plus what the loan costs over its whole term
pub fn loan_quote(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
) -> FinanceResult<LoanQuote> {
    let emi = emi(principal, annual_rate_percent, tenure_months)?;
    let total_payment = emi * f64::from(tenure_months);
    Ok(LoanQuote {
        emi,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Result of the SIP calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipProjection {
    pub maturity: f64,
    pub invested: f64,
    pub returns: f64,
}

/// Maturity value plus how much of it was contributed and how much earned
pub fn sip_projection(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    months: u32,
) -> FinanceResult<SipProjection> {
    let maturity = sip_maturity(monthly_contribution, annual_rate_percent, months)?;
    let invested = monthly_contribution * f64::from(months);
    Ok(SipProjection {
        maturity,
        invested,
        returns: maturity - invested,
    })
}

fn check_positive(value: f64, what: &str) -> FinanceResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "{} must be greater than zero, got {}",
            what, value
        )));
    }
    Ok(())
}

fn check_periods(months: u32, what: &str) -> FinanceResult<()> {
    if months == 0 {
        return Err(FinanceError::InvalidInput(format!(
            "{} must be at least one month",
            what
        )));
    }
    if months > MAX_TERM_MONTHS {
        return Err(FinanceError::InvalidInput(format!(
            "{} of {} months exceeds the {}-month limit",
            what, months, MAX_TERM_MONTHS
        )));
    }
    Ok(())
}

fn ensure_finite(value: f64, what: &str) -> FinanceResult<f64> {
    if !value.is_finite() {
        return Err(FinanceError::InvalidInput(format!(
            "{} is too large to compute",
            what
        )));
    }
    Ok(value)
}

fn check_rate(annual_rate_percent: f64) -> FinanceResult<()> {
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "annual rate must be a non-negative percentage, got {}",
            annual_rate_percent
        )));
    }
    Ok(())
}
