//! Repository traits implemented by the persistence layer.

use finagenda_shared::types::{CategoryId, UserId};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::transaction::Transaction;
use super::types::{Category, CategoryType};
use crate::period::PeriodWindow;

/// Read/append access to the transaction ledger.
///
/// Implementations must treat windows as inclusive on both ends and must
/// exclude unconfirmed entries from every "confirmed" query.
pub trait LedgerRepository: Send + Sync {
    /// Sum of confirmed expenses for one category within `window`.
    ///
    /// No matching entries is a zero sum, not an error.
    fn sum_confirmed_expenses(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        window: &PeriodWindow,
    ) -> Result<Decimal, LedgerError>;

    /// All confirmed transactions of a user dated inside `window`.
    fn confirmed_in_range(
        &self,
        user_id: UserId,
        window: &PeriodWindow,
    ) -> Result<Vec<Transaction>, LedgerError>;

    /// Appends a transaction.
    fn insert(&self, transaction: Transaction) -> Result<(), LedgerError>;
}

/// Lookup of a user's categories.
pub trait CategoryDirectory: Send + Sync {
    /// Finds a category by exact name and type.
    fn find_by_name(
        &self,
        user_id: UserId,
        name: &str,
        category_type: CategoryType,
    ) -> Result<Option<Category>, LedgerError>;

    /// Finds a category by ID.
    fn get(&self, user_id: UserId, category_id: CategoryId) -> Result<Category, LedgerError>;

    /// All category names of a type, in directory order.
    fn names(&self, user_id: UserId, category_type: CategoryType)
    -> Result<Vec<String>, LedgerError>;
}
