//! Agenda event types.

use chrono::{NaiveDate, NaiveDateTime};
use finagenda_shared::types::{EventId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AgendaError;

/// Kind of paid work an event represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Private lesson.
    Class,
    /// Live performance.
    Show,
    /// One-off freelance job.
    Freelance,
    /// Anything else.
    #[default]
    Other,
}

impl EventType {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Show => "Show",
            Self::Freelance => "Freelance",
            Self::Other => "Other",
        }
    }

    /// Income category name used when the event is settled.
    #[must_use]
    pub const fn income_category(self) -> &'static str {
        match self {
            Self::Class => "Private Lessons",
            Self::Show => "Gig Fees",
            Self::Freelance => "Freelance",
            Self::Other => FALLBACK_INCOME_CATEGORY,
        }
    }
}

/// Income category used when the type-specific one is missing.
pub const FALLBACK_INCOME_CATEGORY: &str = "Other";

/// Payment state of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Not paid yet.
    #[default]
    Pending,
    /// Payment received.
    Paid,
    /// Called off.
    Cancelled,
}

/// A scheduled piece of paid work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID.
    pub id: EventId,
    /// Owner.
    pub user_id: UserId,
    /// Title.
    pub title: String,
    /// Kind of work.
    #[serde(default)]
    pub event_type: EventType,
    /// Start, local time.
    pub starts_at: NaiveDateTime,
    /// End, local time.
    #[serde(default)]
    pub ends_at: Option<NaiveDateTime>,
    /// Venue or address.
    #[serde(default)]
    pub location: String,
    /// Agreed fee.
    #[serde(default)]
    pub expected_amount: Option<Decimal>,
    /// Fee actually received, when different.
    #[serde(default)]
    pub actual_amount: Option<Decimal>,
    /// Payment state.
    #[serde(default)]
    pub status: EventStatus,
    /// Client or contractor.
    #[serde(default)]
    pub client_name: String,
    /// Income transaction created on payment.
    #[serde(default)]
    pub linked_transaction: Option<TransactionId>,
    /// Day the payment arrived.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Create the income transaction when the event is paid.
    #[serde(default = "default_auto_create")]
    pub auto_create_transaction: bool,
}

fn default_auto_create() -> bool {
    true
}

impl Event {
    /// Creates a pending event.
    #[must_use]
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        event_type: EventType,
        starts_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: EventId::new(),
            user_id,
            title: title.into(),
            event_type,
            starts_at,
            ends_at: None,
            location: String::new(),
            expected_amount: None,
            actual_amount: None,
            status: EventStatus::Pending,
            client_name: String::new(),
            linked_transaction: None,
            payment_date: None,
            auto_create_transaction: true,
        }
    }

    /// Sets the agreed fee.
    #[must_use]
    pub const fn with_expected_amount(mut self, amount: Decimal) -> Self {
        self.expected_amount = Some(amount);
        self
    }

    /// Sets the client name.
    #[must_use]
    pub fn with_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Actual amount, else expected amount, else zero.
    ///
    /// A zero actual amount counts as unset.
    #[must_use]
    pub fn final_amount(&self) -> Decimal {
        [self.actual_amount, self.expected_amount]
            .into_iter()
            .flatten()
            .find(|amount| !amount.is_zero())
            .unwrap_or(Decimal::ZERO)
    }

    /// True once an income transaction is linked.
    #[must_use]
    pub const fn has_transaction(&self) -> bool {
        self.linked_transaction.is_some()
    }

    /// Checks the stored values.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), AgendaError> {
        if self.title.trim().is_empty() {
            return Err(AgendaError::EmptyTitle);
        }
        if [self.expected_amount, self.actual_amount]
            .into_iter()
            .flatten()
            .any(|amount| amount < Decimal::ZERO)
        {
            return Err(AgendaError::NegativeAmount);
        }
        if self.ends_at.is_some_and(|end| end < self.starts_at) {
            return Err(AgendaError::EndsBeforeStart);
        }
        Ok(())
    }
}
