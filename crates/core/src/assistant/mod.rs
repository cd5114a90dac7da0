//! Prompt building and response parsing for the LLM assistant.
//!
//! Nothing here talks to a provider. Prompts are plain text handed to
//! whatever client the caller uses, and responses come back as text to be
//! parsed into typed proposals.

pub mod chat;
pub mod error;
pub mod parsing;
pub mod prompts;
pub mod types;
pub mod usage;

pub use chat::{ChatMessage, ChatRole, financial_context};
pub use error::AssistantError;
pub use parsing::{
    extract_json, parse_budget_check, parse_cashflow_forecast, parse_category_suggestion,
    parse_monthly_insights, parse_transaction_proposal,
};
pub use prompts::{Prompt, PromptBuilder, format_categories, normalize_categories, truncate_input};
pub use types::{
    BudgetCheck, CashflowForecast, CategorySuggestion, MonthlyInsights, TransactionProposal,
};
pub use usage::{AssistantFeature, UsageRecord};
