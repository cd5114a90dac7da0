//! Ledger error types.

use finagenda_shared::AppError;
use finagenda_shared::types::{CategoryId, TransactionId};
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The backing store could not be reached or failed mid-query.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// Category does not exist for this user.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A transaction with this ID already exists.
    #[error("Duplicate transaction: {0}")]
    DuplicateTransaction(TransactionId),

    /// Transaction amount must be positive.
    #[error("Transaction amount must be positive")]
    NonPositiveAmount,

    /// Month is not in `YYYY-MM` form or out of range.
    #[error("Invalid month: {0:?}, expected YYYY-MM")]
    InvalidMonth(String),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unavailable(_) => Self::Storage(err.to_string()),
            LedgerError::CategoryNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::DuplicateTransaction(_) => Self::Conflict(err.to_string()),
            LedgerError::NonPositiveAmount | LedgerError::InvalidMonth(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
