//! Goal, loan and calculator output

use tabled::Tabled;

use super::report::{format_amount, format_bar, format_percentage, table};
use crate::calc::goal::GoalPlan;
use crate::calc::loan::{AmortizationRow, LoanSummary};
use crate::calc::{LoanQuote, SipProjection};
use crate::models::{Goal, Loan};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    current: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Return")]
    rate: String,
    #[tabled(rename = "Monthly SIP")]
    contribution: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

pub fn format_goal_list(goals: &[(Goal, GoalPlan)], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }

    table(goals.iter().map(|(goal, plan)| GoalRow {
        id: goal.id.to_string(),
        name: goal.name.clone(),
        target: goal.target_amount.format_with_symbol(symbol),
        current: goal.current_amount.format_with_symbol(symbol),
        months: goal.horizon_months,
        rate: format!("{}%", goal.expected_annual_rate_percent),
        contribution: if plan.is_met() {
            "met".to_string()
        } else {
            format_amount(plan.required_monthly_contribution, symbol)
        },
        progress: format!(
            "{} {}",
            format_bar(plan.display_progress_percent(), 100.0, 10),
            format_percentage(plan.progress_percent)
        ),
    }))
}

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Loan")]
    name: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "EMI")]
    emi: String,
    #[tabled(rename = "Outstanding")]
    outstanding: String,
    #[tabled(rename = "Repaid")]
    repaid: String,
}

pub fn format_loan_list(loans: &[(Loan, LoanSummary)], symbol: &str) -> String {
    if loans.is_empty() {
        return "No loans recorded.".to_string();
    }

    table(loans.iter().map(|(loan, summary)| LoanRow {
        id: loan.id.to_string(),
        name: loan.name.clone(),
        principal: loan.principal.format_with_symbol(symbol),
        rate: format!("{}%", loan.annual_rate_percent),
        months: loan.tenure_months,
        emi: format_amount(summary.quote.emi, symbol),
        outstanding: loan.outstanding.format_with_symbol(symbol),
        repaid: format_percentage(summary.repaid_percent),
    }))
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

pub fn format_schedule(loan: &Loan, rows: &[AmortizationRow], symbol: &str) -> String {
    let mut output = format!(
        "Repayment schedule for {} ({} at {}% over {} months)\n",
        loan.name,
        loan.principal.format_with_symbol(symbol),
        loan.annual_rate_percent,
        loan.tenure_months
    );
    output.push_str(&table(rows.iter().map(|row| ScheduleRow {
        month: row.month,
        payment: format_amount(row.payment, symbol),
        interest: format_amount(row.interest, symbol),
        principal: format_amount(row.principal, symbol),
        balance: format_amount(row.balance, symbol),
    })));
    output
}

pub fn format_loan_quote(quote: &LoanQuote, symbol: &str) -> String {
    format!(
        "Monthly EMI:     {}\nTotal payment:   {}\nTotal interest:  {}",
        format_amount(quote.emi, symbol),
        format_amount(quote.total_payment, symbol),
        format_amount(quote.total_interest, symbol),
    )
}

pub fn format_sip_projection(projection: &SipProjection, symbol: &str) -> String {
    format!(
        "Maturity value:  {}\nTotal invested:  {}\nEst. returns:    {}",
        format_amount(projection.maturity, symbol),
        format_amount(projection.invested, symbol),
        format_amount(projection.returns, symbol),
    )
}

pub fn format_goal_plan(plan: &GoalPlan, symbol: &str) -> String {
    if plan.is_met() {
        return "Goal already reached; no further investment needed.".to_string();
    }
    format!(
        "Amount still needed:      {}\nRequired monthly SIP:     {}",
        plan.remaining.format_with_symbol(symbol),
        format_amount(plan.required_monthly_contribution, symbol),
    )
}
