//! Transaction service
//!
//! Recording, editing, listing and deleting income and expenses.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionFilter, TransactionKind};
use crate::storage::Storage;

pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing transaction; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    /// A blank string clears the notes
    pub notes: Option<String>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.notes.is_none()
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(
        &self,
        kind: TransactionKind,
        amount: Money,
        category: &str,
        date: NaiveDate,
        description: &str,
        notes: Option<&str>,
    ) -> FinanceResult<Transaction> {
        let mut txn = Transaction::new(kind, amount, category, date, description)?;
        if let Some(notes) = notes {
            txn = txn.with_notes(notes);
        }

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.description)),
            &txn,
        )?;

        Ok(txn)
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(filter.apply(&all).into_iter().cloned().collect())
    }

    /// Edit a transaction. The result is rebuilt through the constructor so
    /// it obeys the same rules as a new one; ID and creation time are kept.
    pub fn update(&self, id: &str, input: UpdateTransactionInput) -> FinanceResult<Transaction> {
        if input.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }

        let before = self.storage.transactions.resolve(id)?;

        let mut after = Transaction::new(
            input.kind.unwrap_or(before.kind),
            input.amount.unwrap_or(before.amount),
            input.category.unwrap_or_else(|| before.category.clone()),
            input.date.unwrap_or(before.date),
            input.description.unwrap_or_else(|| before.description.clone()),
        )?;
        after.id = before.id;
        after.created_at = before.created_at;
        after = match input.notes {
            Some(notes) => after.with_notes(notes),
            None => Transaction {
                notes: before.notes.clone(),
                ..after
            },
        };

        self.storage.transactions.update(after.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_update(
            EntityType::Transaction,
            after.id.to_string(),
            Some(format!("{} {}", after.date, after.description)),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Delete a transaction by ID or ID prefix
    pub fn delete(&self, id: &str) -> FinanceResult<Transaction> {
        let txn = self.storage.transactions.resolve(id)?;

        self.storage.transactions.remove(txn.id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.description)),
            &txn,
        )?;

        Ok(txn)
    }
}
