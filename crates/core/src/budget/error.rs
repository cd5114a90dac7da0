//! Budget error types.

use chrono::NaiveDate;
use finagenda_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::period::PeriodError;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Limit must not be negative.
    #[error("Budget limit cannot be negative: {0}")]
    NegativeLimit(Decimal),

    /// Threshold is a percentage between 0 and 100.
    #[error("Alert threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u8),

    /// End date precedes the anchor date.
    #[error("Budget ends on {end_date}, before its anchor date {anchor_date}")]
    EndBeforeAnchor {
        /// First period start.
        anchor_date: NaiveDate,
        /// Configured last day.
        end_date: NaiveDate,
    },

    /// Period could not be resolved.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// Ledger query failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Schedule store could not be read.
    #[error("Schedule source unavailable: {0}")]
    SourceUnavailable(String),
}

impl BudgetError {
    /// True for problems confined to a single schedule's stored data.
    ///
    /// Such schedules are skipped in a report while the rest are evaluated.
    #[must_use]
    pub const fn is_schedule_local(&self) -> bool {
        matches!(
            self,
            Self::NegativeLimit(_)
                | Self::ThresholdOutOfRange(_)
                | Self::EndBeforeAnchor { .. }
                | Self::Period(_)
        )
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::Period(inner) => inner.into(),
            BudgetError::Ledger(inner) => inner.into(),
            BudgetError::SourceUnavailable(_) => Self::Storage(err.to_string()),
            BudgetError::NegativeLimit(_)
            | BudgetError::ThresholdOutOfRange(_)
            | BudgetError::EndBeforeAnchor { .. } => Self::Validation(err.to_string()),
        }
    }
}
