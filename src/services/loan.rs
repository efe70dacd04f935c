//! Loan service

use crate::audit::EntityType;
use crate::calc::loan::{amortization_schedule, summarize, AmortizationRow, LoanSummary};
use crate::error::FinanceResult;
use crate::models::{Loan, Money};
use crate::storage::Storage;

pub struct LoanService<'a> {
    storage: &'a Storage,
}

impl<'a> LoanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(
        &self,
        name: &str,
        principal: Money,
        annual_rate_percent: f64,
        tenure_months: u32,
        outstanding: Option<Money>,
    ) -> FinanceResult<Loan> {
        let mut loan = Loan::new(name, principal, annual_rate_percent, tenure_months)?;
        if let Some(outstanding) = outstanding {
            loan = loan.with_outstanding(outstanding)?;
        }

        self.storage.loans.insert(loan.clone())?;
        self.storage.loans.save()?;

        self.storage.log_create(
            EntityType::Loan,
            loan.id.to_string(),
            Some(loan.name.clone()),
            &loan,
        )?;

        Ok(loan)
    }

    pub fn list_with_summaries(&self) -> FinanceResult<Vec<(Loan, LoanSummary)>> {
        self.storage
            .loans
            .get_all()?
            .into_iter()
            .map(|loan| {
                let summary = summarize(&loan)?;
                Ok((loan, summary))
            })
            .collect()
    }

    /// The loan and its full repayment schedule
    pub fn schedule(&self, id: &str) -> FinanceResult<(Loan, Vec<AmortizationRow>)> {
        let loan = self.storage.loans.resolve(id)?;
        let rows = amortization_schedule(
            loan.principal.to_f64(),
            loan.annual_rate_percent,
            loan.tenure_months,
        )?;
        Ok((loan, rows))
    }

    pub fn delete(&self, id: &str) -> FinanceResult<Loan> {
        let loan = self.storage.loans.resolve(id)?;

        self.storage.loans.remove(loan.id)?;
        self.storage.loans.save()?;

        self.storage.log_delete(
            EntityType::Loan,
            loan.id.to_string(),
            Some(loan.name.clone()),
            &loan,
        )?;

        Ok(loan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinanceHubPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanceHubPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_summarize() {
        let (_temp, storage) = create_test_storage();
        let service = LoanService::new(&storage);

        service
            .create("Car", Money::from_major(100_000), 10.0, 12, Some(Money::from_major(40_000)))
            .unwrap();

        let loans = service.list_with_summaries().unwrap();
        let (loan, summary) = &loans[0];
        assert_eq!(loan.outstanding, Money::from_major(40_000));
        assert!((summary.quote.total_interest - 5_499.06).abs() < 0.01);
        assert_eq!(summary.repaid_percent, 60.0);
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let (_temp, storage) = create_test_storage();
        let service = LoanService::new(&storage);
        service
            .create("Laptop", Money::from_major(60_000), 12.0, 6, None)
            .unwrap();

        let (loan, rows) = service.schedule("laptop").unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].balance, 0.0);
        let principal_paid: f64 = rows.iter().map(|r| r.principal).sum();
        assert!((principal_paid - loan.principal.to_f64()).abs() < 1e-6);
    }

    #[test]
    fn test_create_rejects_zero_tenure() {
        let (_temp, storage) = create_test_storage();
        let service = LoanService::new(&storage);
        assert!(service
            .create("Bad", Money::from_major(1_000), 5.0, 0, None)
            .unwrap_err()
            .is_validation());
    }
}
