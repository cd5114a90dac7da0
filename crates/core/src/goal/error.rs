//! Goal error types.

use finagenda_shared::AppError;
use thiserror::Error;

use super::types::GoalStatus;

/// Errors raised by savings goals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// Contributions must be positive.
    #[error("Contribution amount must be positive")]
    NonPositiveAmount,

    /// Only active goals accept contributions.
    #[error("Goal is not active: {0:?}")]
    NotActive(GoalStatus),

    /// Target must not be negative.
    #[error("Goal target cannot be negative")]
    NegativeTarget,
}

impl From<GoalError> for AppError {
    fn from(err: GoalError) -> Self {
        match err {
            GoalError::NotActive(_) => Self::BusinessRule(err.to_string()),
            GoalError::NonPositiveAmount | GoalError::NegativeTarget => {
                Self::Validation(err.to_string())
            }
        }
    }
}
