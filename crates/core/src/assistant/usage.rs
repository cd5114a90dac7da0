//! Per-call usage records for cost tracking.

use serde::{Deserialize, Serialize};

/// Assistant feature a call was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantFeature {
    /// Free text to transaction.
    ParseTransaction,
    /// Monthly commentary.
    Insights,
    /// Conversation.
    Chat,
    /// Category choice.
    Categorize,
    /// Cash flow projection.
    Forecast,
    /// Budget review.
    BudgetCheck,
}

/// What one model call consumed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Feature the call served.
    pub feature: AssistantFeature,
    /// Characters sent.
    pub input_chars: usize,
    /// Characters received; zero on failure.
    pub output_chars: usize,
    /// Model identifier.
    pub model: String,
    /// False if the call or its parsing failed.
    pub success: bool,
    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UsageRecord {
    /// Record of a call that produced `output`.
    #[must_use]
    pub fn succeeded(
        feature: AssistantFeature,
        model: impl Into<String>,
        input: &str,
        output: &str,
    ) -> Self {
        Self {
            feature,
            input_chars: input.chars().count(),
            output_chars: output.chars().count(),
            model: model.into(),
            success: true,
            error: None,
        }
    }

    /// Record of a call that failed with `error`.
    #[must_use]
    pub fn failed(
        feature: AssistantFeature,
        model: impl Into<String>,
        input: &str,
        error: impl Into<String>,
    ) -> Self {
        Self {
            feature,
            input_chars: input.chars().count(),
            output_chars: 0,
            model: model.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}
