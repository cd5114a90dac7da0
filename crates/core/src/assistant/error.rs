//! Assistant error types.

use finagenda_shared::AppError;
use thiserror::Error;

/// Errors raised while reading a model response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// The response holds no JSON object.
    #[error("No JSON found in assistant response | Raw: {0}")]
    NoJson(String),

    /// The JSON is malformed or a field has an unusable value.
    #[error("Invalid assistant response: {0}")]
    InvalidResponse(String),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
