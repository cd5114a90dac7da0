//! Spend aggregation over a resolved period window.

use std::sync::Arc;

use finagenda_shared::types::{CategoryId, UserId};

use super::error::LedgerError;
use super::repository::LedgerRepository;
use super::types::SpendTotal;
use crate::period::PeriodWindow;

/// Sums confirmed expenses for a category and window.
pub struct SpendAggregator<R: LedgerRepository> {
    ledger: Arc<R>,
}

impl<R: LedgerRepository> SpendAggregator<R> {
    /// Creates an aggregator over a ledger.
    #[must_use]
    pub fn new(ledger: Arc<R>) -> Self {
        Self { ledger }
    }

    /// Confirmed expense total for `category_id` between the window bounds, inclusive.
    ///
    /// An empty result is a zero total. Ledger failures are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the ledger's error if the query fails.
    pub fn spend_for(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        window: PeriodWindow,
    ) -> Result<SpendTotal, LedgerError> {
        let amount = self
            .ledger
            .sum_confirmed_expenses(user_id, category_id, &window)?;

        Ok(SpendTotal {
            category_id,
            window,
            amount,
        })
    }
}

impl<R: LedgerRepository> Clone for SpendAggregator<R> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
        }
    }
}
