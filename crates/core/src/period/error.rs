//! Period resolution errors.

use finagenda_shared::AppError;
use thiserror::Error;

/// Errors raised while resolving a recurring period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// The stored period code is not weekly, monthly, or yearly.
    #[error("invalid period kind: {0:?}")]
    InvalidPeriodKind(String),

    /// Date arithmetic left the representable calendar range.
    #[error("period arithmetic out of range for anchor {0}")]
    DateOutOfRange(chrono::NaiveDate),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::InvalidPeriodKind(_) => Self::Validation(err.to_string()),
            PeriodError::DateOutOfRange(_) => Self::BusinessRule(err.to_string()),
        }
    }
}
