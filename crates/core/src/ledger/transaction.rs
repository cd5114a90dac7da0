//! Ledger transactions.

use chrono::NaiveDate;
use finagenda_shared::types::{AccountId, CategoryId, EventId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::types::TransactionType;
use crate::period::PeriodWindow;

/// Maximum stored length of a transaction description.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Owner.
    pub user_id: UserId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Positive amount.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
    /// Short description.
    pub description: String,
    /// Category, if assigned.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Money account, if assigned.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Comma-separated tags.
    #[serde(default)]
    pub tags: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// False while an assistant proposal awaits the user's confirmation.
    #[serde(default = "default_confirmed")]
    pub is_confirmed: bool,
    /// Agenda event this transaction settles.
    #[serde(default)]
    pub source_event: Option<EventId>,
    /// Category chosen by the assistant.
    #[serde(default)]
    pub ai_categorized: bool,
    /// Assistant confidence in `[0, 1]`.
    #[serde(default)]
    pub ai_confidence: Option<Decimal>,
}

fn default_confirmed() -> bool {
    true
}

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Owner.
    pub user_id: UserId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Amount, must be positive.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
    /// Description, truncated to 255 characters.
    pub description: String,
    /// Category, if known.
    pub category_id: Option<CategoryId>,
    /// Whether the entry is confirmed.
    pub is_confirmed: bool,
    /// Notes.
    pub notes: String,
    /// Settled event, if any.
    pub source_event: Option<EventId>,
}

impl Transaction {
    /// Builds a transaction from validated input with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NonPositiveAmount` if the amount is zero or negative.
    pub fn record(input: NewTransaction) -> Result<Self, LedgerError> {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }

        Ok(Self {
            id: TransactionId::new(),
            user_id: input.user_id,
            transaction_type: input.transaction_type,
            amount: input.amount,
            date: input.date,
            description: truncate_chars(&input.description, DESCRIPTION_MAX_CHARS),
            category_id: input.category_id,
            account_id: None,
            tags: String::new(),
            notes: input.notes,
            is_confirmed: input.is_confirmed,
            source_event: input.source_event,
            ai_categorized: false,
            ai_confidence: None,
        })
    }

    /// Tags as a list, trimmed, blanks removed.
    #[must_use]
    pub fn tags_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// True for a confirmed expense of `category_id` dated inside `window`.
    #[must_use]
    pub fn counts_toward(&self, category_id: CategoryId, window: &PeriodWindow) -> bool {
        self.is_confirmed
            && self.transaction_type == TransactionType::Expense
            && self.category_id == Some(category_id)
            && window.contains(self.date)
    }
}

/// Truncates on a character boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
