//! Investment portfolio service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::calc::portfolio::{summarize, PortfolioSummary};
use crate::error::FinanceResult;
use crate::models::{Holding, Money, RiskLevel};
use crate::storage::Storage;

pub struct PortfolioService<'a> {
    storage: &'a Storage,
}

impl<'a> PortfolioService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(
        &self,
        name: &str,
        units: f64,
        buy_price: Money,
        current_price: Money,
        risk: RiskLevel,
        date: NaiveDate,
    ) -> FinanceResult<Holding> {
        let holding = Holding::new(name, units, buy_price, current_price, date)?.with_risk(risk);

        self.storage.holdings.insert(holding.clone())?;
        self.storage.holdings.save()?;

        self.storage.log_create(
            EntityType::Investment,
            holding.id.to_string(),
            Some(holding.name.clone()),
            &holding,
        )?;

        Ok(holding)
    }

    /// All holdings plus the portfolio figures computed from them
    pub fn summary(&self) -> FinanceResult<(Vec<Holding>, PortfolioSummary)> {
        let holdings = self.storage.holdings.get_all()?;
        let summary = summarize(&holdings);
        Ok((holdings, summary))
    }

    pub fn delete(&self, id: &str) -> FinanceResult<Holding> {
        let holding = self.storage.holdings.resolve(id)?;

        self.storage.holdings.remove(holding.id)?;
        self.storage.holdings.save()?;

        self.storage.log_delete(
            EntityType::Investment,
            holding.id.to_string(),
            Some(holding.name.clone()),
            &holding,
        )?;

        Ok(holding)
    }
}
