//! In-memory ledger and category directory.
//!
//! Used by the report CLI and by tests. Both stores are safe to share across
//! threads.

use std::collections::HashSet;

use dashmap::DashMap;
use finagenda_shared::types::{CategoryId, TransactionId, UserId};
use rust_decimal::Decimal;

use super::defaults::default_categories;
use super::error::LedgerError;
use super::repository::{CategoryDirectory, LedgerRepository};
use super::transaction::Transaction;
use super::types::{Category, CategoryType};
use crate::period::PeriodWindow;

/// Transaction store keyed by transaction ID.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    transactions: DashMap<TransactionId, Transaction>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-filled with transactions.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DuplicateTransaction` on repeated IDs.
    pub fn with_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> Result<Self, LedgerError> {
        let ledger = Self::new();
        for transaction in transactions {
            ledger.insert(transaction)?;
        }
        Ok(ledger)
    }

    /// Looks up a transaction by ID.
    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of stored transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl LedgerRepository for InMemoryLedger {
    fn sum_confirmed_expenses(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        window: &PeriodWindow,
    ) -> Result<Decimal, LedgerError> {
        Ok(self
            .transactions
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.counts_toward(category_id, window))
            .map(|entry| entry.amount)
            .sum())
    }

    fn confirmed_in_range(
        &self,
        user_id: UserId,
        window: &PeriodWindow,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let mut found: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|entry| {
                entry.user_id == user_id && entry.is_confirmed && window.contains(entry.date)
            })
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(found)
    }

    fn insert(&self, transaction: Transaction) -> Result<(), LedgerError> {
        match self.transactions.entry(transaction.id) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(LedgerError::DuplicateTransaction(transaction.id))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(transaction);
                Ok(())
            }
        }
    }
}

/// Category store keyed by category ID.
#[derive(Debug, Default)]
pub struct InMemoryCategories {
    categories: DashMap<CategoryId, Category>,
}

impl InMemoryCategories {
    /// Creates a directory from a list of categories.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Adds or replaces a category.
    pub fn upsert(&self, category: Category) {
        self.categories.insert(category.id, category);
    }

    /// Adds the default categories `user_id` does not have yet.
    ///
    /// Existing categories are matched by name and type and left untouched.
    /// Returns how many were added.
    pub fn ensure_defaults(&self, user_id: UserId) -> usize {
        let existing: HashSet<(String, CategoryType)> = self
            .categories
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| (entry.name.clone(), entry.category_type))
            .collect();

        let mut added = 0;
        for category in default_categories(user_id) {
            if !existing.contains(&(category.name.clone(), category.category_type)) {
                self.upsert(category);
                added += 1;
            }
        }
        added
    }

    fn sorted_for(&self, user_id: UserId, category_type: CategoryType) -> Vec<Category> {
        let mut found: Vec<Category> = self
            .categories
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.category_type == category_type)
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| a.name.cmp(&b.name)));
        found
    }
}

impl CategoryDirectory for InMemoryCategories {
    fn find_by_name(
        &self,
        user_id: UserId,
        name: &str,
        category_type: CategoryType,
    ) -> Result<Option<Category>, LedgerError> {
        Ok(self
            .sorted_for(user_id, category_type)
            .into_iter()
            .find(|category| category.name == name))
    }

    fn get(&self, user_id: UserId, category_id: CategoryId) -> Result<Category, LedgerError> {
        self.categories
            .get(&category_id)
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .ok_or(LedgerError::CategoryNotFound(category_id))
    }

    fn names(
        &self,
        user_id: UserId,
        category_type: CategoryType,
    ) -> Result<Vec<String>, LedgerError> {
        Ok(self
            .sorted_for(user_id, category_type)
            .into_iter()
            .map(|category| category.name)
            .collect())
    }
}
