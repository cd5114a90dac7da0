//! Agenda error types.

use finagenda_shared::AppError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors raised by agenda events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    /// Title is blank.
    #[error("Event title cannot be empty")]
    EmptyTitle,

    /// Expected or actual amount is negative.
    #[error("Event amounts cannot be negative")]
    NegativeAmount,

    /// The event ends before it starts.
    #[error("Event ends before it starts")]
    EndsBeforeStart,

    /// Creating or linking the income transaction failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        match err {
            AgendaError::Ledger(inner) => inner.into(),
            AgendaError::EmptyTitle
            | AgendaError::NegativeAmount
            | AgendaError::EndsBeforeStart => Self::Validation(err.to_string()),
        }
    }
}
