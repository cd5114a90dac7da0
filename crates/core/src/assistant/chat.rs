//! Conversational assistant: message types and the financial context fed to it.

use serde::{Deserialize, Serialize};

use crate::goal::Goal;
use crate::ledger::types::format_amount;
use crate::ledger::{MonthlySummary, Transaction, TransactionType};

/// Number of recent transactions and goals listed in the context.
pub const CONTEXT_ITEMS: usize = 5;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions and context.
    System,
    /// The person asking.
    User,
    /// The model.
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,
    /// Text.
    pub content: String,
}

impl ChatMessage {
    /// Message from the person asking.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Reply from the model.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Instructions for the model.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }
}

const fn type_label(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
    }
}

/// Plain-text snapshot of a user's month, recent activity and goals.
///
/// Only confirmed transactions are listed, newest first, at most
/// [`CONTEXT_ITEMS`] of them. Goals are listed in the order given.
#[must_use]
pub fn financial_context(
    summary: &MonthlySummary,
    recent: &[Transaction],
    goals: &[Goal],
) -> String {
    let mut confirmed: Vec<&Transaction> = recent.iter().filter(|t| t.is_confirmed).collect();
    // Stable, so same-day transactions keep the caller's order.
    confirmed.sort_by(|a, b| b.date.cmp(&a.date));

    let mut recent_lines: Vec<String> = confirmed
        .into_iter()
        .take(CONTEXT_ITEMS)
        .map(|t| {
            format!(
                "- {}: {} ({}) {}",
                t.date,
                t.description,
                type_label(t.transaction_type),
                format_amount(t.amount)
            )
        })
        .collect();
    if recent_lines.is_empty() {
        recent_lines.push("- No recent transactions".to_string());
    }

    let mut goal_lines: Vec<String> = goals
        .iter()
        .take(CONTEXT_ITEMS)
        .map(|g| {
            format!(
                "- {}: {} of {} ({}%)",
                g.name,
                format_amount(g.current_amount),
                format_amount(g.target_amount),
                g.progress_percentage().round_dp(0)
            )
        })
        .collect();
    if goal_lines.is_empty() {
        goal_lines.push("- No goals registered".to_string());
    }

    format!(
        "Current financial summary ({month}):\n\
         - Month income: {income}\n\
         - Month expenses: {expenses}\n\
         - Month balance: {balance}\n\
         \n\
         Recent transactions:\n{recent}\n\
         \n\
         Goals in progress:\n{goals}",
        month = summary.month,
        income = format_amount(summary.income),
        expenses = format_amount(summary.expenses),
        balance = format_amount(summary.balance),
        recent = recent_lines.join("\n"),
        goals = goal_lines.join("\n"),
    )
}
