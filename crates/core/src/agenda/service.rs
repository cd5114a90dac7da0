//! Settlement of paid events into income transactions.

use std::sync::Arc;

use chrono::NaiveDate;
use finagenda_shared::types::{CategoryId, TransactionId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::AgendaError;
use super::types::{Event, EventStatus, FALLBACK_INCOME_CATEGORY};
use crate::ledger::{
    CategoryDirectory, CategoryType, LedgerRepository, NewTransaction, Transaction,
    TransactionType,
};

/// Result of a settlement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "transaction_id", rename_all = "snake_case")]
pub enum SettlementOutcome {
    /// An income transaction was created and linked.
    Created(TransactionId),
    /// The event already had a linked transaction.
    AlreadyLinked,
    /// The event opted out of automatic transactions.
    AutoCreateDisabled,
    /// Neither actual nor expected amount is set.
    MissingAmount,
    /// The event is not paid.
    NotPaid,
    /// The event was already paid before this change.
    Unchanged,
}

/// Applies status changes to events and books their income.
pub struct EventService<R: LedgerRepository, C: CategoryDirectory> {
    ledger: Arc<R>,
    categories: Arc<C>,
}

impl<R: LedgerRepository, C: CategoryDirectory> EventService<R, C> {
    /// Creates a new event service.
    #[must_use]
    pub fn new(ledger: Arc<R>, categories: Arc<C>) -> Self {
        Self { ledger, categories }
    }

    /// Sets the status of an event.
    ///
    /// Moving into `Paid` settles the event. Any other change only updates
    /// the status. An invalid event is rejected before its status changes.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid event, or
    /// `AgendaError::Ledger` if the transaction cannot be stored.
    pub fn change_status(
        &self,
        event: &mut Event,
        new_status: EventStatus,
        today: NaiveDate,
    ) -> Result<SettlementOutcome, AgendaError> {
        event.validate()?;
        let previous = event.status;
        event.status = new_status;

        if new_status != EventStatus::Paid {
            return Ok(SettlementOutcome::NotPaid);
        }
        if previous == EventStatus::Paid {
            return Ok(SettlementOutcome::Unchanged);
        }

        self.settle_paid_event(event, today)
    }

    /// Books the income of a paid event and links the transaction to it.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid event, or
    /// `AgendaError::Ledger` if a category lookup or the insert fails.
    pub fn settle_paid_event(
        &self,
        event: &mut Event,
        today: NaiveDate,
    ) -> Result<SettlementOutcome, AgendaError> {
        event.validate()?;
        if event.status != EventStatus::Paid {
            return Ok(SettlementOutcome::NotPaid);
        }
        if !event.auto_create_transaction {
            debug!(event_id = %event.id, "Automatic transaction disabled");
            return Ok(SettlementOutcome::AutoCreateDisabled);
        }
        if event.has_transaction() {
            debug!(event_id = %event.id, "Event already linked to a transaction");
            return Ok(SettlementOutcome::AlreadyLinked);
        }

        let amount = event.final_amount();
        if amount <= Decimal::ZERO {
            warn!(event_id = %event.id, "Paid event has no amount, no transaction created");
            return Ok(SettlementOutcome::MissingAmount);
        }

        let transaction = Transaction::record(NewTransaction {
            user_id: event.user_id,
            transaction_type: TransactionType::Income,
            amount,
            date: event
                .payment_date
                .unwrap_or_else(|| event.starts_at.date()),
            description: describe(event),
            category_id: self.income_category_for(event)?,
            is_confirmed: true,
            notes: format!("Generated automatically from event: {}", event.title),
            source_event: Some(event.id),
        })?;
        let transaction_id = transaction.id;
        self.ledger.insert(transaction)?;

        event.linked_transaction = Some(transaction_id);
        event.payment_date = Some(event.payment_date.unwrap_or(today));

        info!(
            event_id = %event.id,
            transaction_id = %transaction_id,
            %amount,
            "Income transaction created from paid event"
        );

        Ok(SettlementOutcome::Created(transaction_id))
    }

    fn income_category_for(&self, event: &Event) -> Result<Option<CategoryId>, AgendaError> {
        let preferred = event.event_type.income_category();
        let mut names = vec![preferred];
        if preferred != FALLBACK_INCOME_CATEGORY {
            names.push(FALLBACK_INCOME_CATEGORY);
        }

        for name in names {
            if let Some(category) =
                self.categories
                    .find_by_name(event.user_id, name, CategoryType::Income)?
            {
                return Ok(Some(category.id));
            }
        }

        warn!(event_id = %event.id, category = preferred, "No income category found");
        Ok(None)
    }
}

fn describe(event: &Event) -> String {
    let mut description = format!("{}: {}", event.event_type.label(), event.title);
    if !event.client_name.is_empty() {
        description.push_str(&format!(" ({})", event.client_name));
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::types::EventType;
    use crate::ledger::{Category, InMemoryCategories, InMemoryLedger, default_categories};
    use chrono::NaiveDateTime;
    use finagenda_shared::types::UserId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn starts() -> NaiveDateTime {
        date(2026, 5, 9).and_hms_opt(20, 0, 0).unwrap()
    }

    fn income_category(user_id: UserId, name: &str) -> Category {
        Category {
            id: CategoryId::new(),
            user_id,
            name: name.to_string(),
            category_type: CategoryType::Income,
            color: "#22c55e".to_string(),
            group: "Work".to_string(),
            is_essential: false,
        }
    }

    fn service(
        categories: Vec<Category>,
    ) -> (EventService<InMemoryLedger, InMemoryCategories>, Arc<InMemoryLedger>) {
        let ledger = Arc::new(InMemoryLedger::new());
        let service = EventService::new(
            Arc::clone(&ledger),
            Arc::new(InMemoryCategories::new(categories)),
        );
        (service, ledger)
    }

    #[test]
    fn test_paid_show_creates_linked_income() {
        let user = UserId::new();
        let gig_fees = income_category(user, "Gig Fees");
        let gig_fees_id = gig_fees.id;
        let (service, ledger) = service(vec![gig_fees, income_category(user, "Other")]);
        let mut event = Event::new(user, "Jazz night", EventType::Show, starts())
            .with_expected_amount(dec!(400))
            .with_client("Blue Note");

        let outcome = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 11))
            .unwrap();

        let SettlementOutcome::Created(id) = outcome else {
            panic!("expected a created transaction, got {outcome:?}");
        };
        let tx = ledger.get(id).unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Income);
        assert_eq!(tx.amount, dec!(400));
        assert_eq!(tx.date, date(2026, 5, 9));
        assert_eq!(tx.description, "Show: Jazz night (Blue Note)");
        assert_eq!(tx.category_id, Some(gig_fees_id));
        assert_eq!(tx.source_event, Some(event.id));
        assert_eq!(tx.notes, "Generated automatically from event: Jazz night");
        assert!(tx.is_confirmed);
        assert_eq!(event.linked_transaction, Some(id));
        assert_eq!(event.payment_date, Some(date(2026, 5, 11)));
    }

    #[test]
    fn test_payment_date_is_used_as_transaction_date() {
        let user = UserId::new();
        let (service, ledger) = service(vec![]);
        let mut event = Event::new(user, "Mixing", EventType::Freelance, starts())
            .with_expected_amount(dec!(300));
        event.actual_amount = Some(dec!(350));
        event.payment_date = Some(date(2026, 5, 20));

        let outcome = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 6, 1))
            .unwrap();

        let SettlementOutcome::Created(id) = outcome else {
            panic!("expected a created transaction");
        };
        let tx = ledger.get(id).unwrap();
        assert_eq!(tx.amount, dec!(350));
        assert_eq!(tx.date, date(2026, 5, 20));
        assert_eq!(tx.category_id, None);
        assert_eq!(event.payment_date, Some(date(2026, 5, 20)));
    }

    #[test]
    fn test_falls_back_to_other_category() {
        let user = UserId::new();
        let other = income_category(user, "Other");
        let other_id = other.id;
        let (service, ledger) = service(vec![other]);
        let mut event =
            Event::new(user, "Piano", EventType::Class, starts()).with_expected_amount(dec!(80));

        let SettlementOutcome::Created(id) = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 9))
            .unwrap()
        else {
            panic!("expected a created transaction");
        };
        assert_eq!(ledger.get(id).unwrap().category_id, Some(other_id));
    }

    #[test]
    fn test_second_paid_transition_does_not_duplicate() {
        let user = UserId::new();
        let (service, ledger) = service(vec![]);
        let mut event =
            Event::new(user, "Piano", EventType::Class, starts()).with_expected_amount(dec!(80));

        service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 9))
            .unwrap();
        let again = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 10))
            .unwrap();
        assert_eq!(again, SettlementOutcome::Unchanged);

        event.status = EventStatus::Pending;
        let relinked = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 10))
            .unwrap();
        assert_eq!(relinked, SettlementOutcome::AlreadyLinked);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_skips_without_amount_or_when_disabled() {
        let user = UserId::new();
        let (service, ledger) = service(vec![]);

        let mut no_amount = Event::new(user, "Jam", EventType::Show, starts());
        assert_eq!(
            service
                .change_status(&mut no_amount, EventStatus::Paid, date(2026, 5, 9))
                .unwrap(),
            SettlementOutcome::MissingAmount
        );

        let mut disabled =
            Event::new(user, "Jam", EventType::Show, starts()).with_expected_amount(dec!(50));
        disabled.auto_create_transaction = false;
        assert_eq!(
            service
                .change_status(&mut disabled, EventStatus::Paid, date(2026, 5, 9))
                .unwrap(),
            SettlementOutcome::AutoCreateDisabled
        );

        let mut cancelled =
            Event::new(user, "Jam", EventType::Show, starts()).with_expected_amount(dec!(50));
        assert_eq!(
            service
                .change_status(&mut cancelled, EventStatus::Cancelled, date(2026, 5, 9))
                .unwrap(),
            SettlementOutcome::NotPaid
        );
        assert_eq!(cancelled.status, EventStatus::Cancelled);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_long_description_is_truncated() {
        let user = UserId::new();
        let (service, ledger) = service(vec![]);
        let mut event = Event::new(user, "x".repeat(300), EventType::Other, starts())
            .with_expected_amount(dec!(10));

        let SettlementOutcome::Created(id) = service
            .change_status(&mut event, EventStatus::Paid, date(2026, 5, 9))
            .unwrap()
        else {
            panic!("expected a created transaction");
        };
        let tx = ledger.get(id).unwrap();
        assert_eq!(tx.description.chars().count(), 255);
        assert!(tx.description.starts_with("Other: xxx"));
    }

    #[test]
    fn test_negative_amount_is_rejected_not_skipped() {
        let user = UserId::new();
        let (service, ledger) = service(vec![]);
        let mut event =
            Event::new(user, "Jam", EventType::Show, starts()).with_expected_amount(dec!(50));
        event.actual_amount = Some(dec!(-50));

        assert_eq!(
            service.change_status(&mut event, EventStatus::Paid, date(2026, 5, 9)),
            Err(AgendaError::NegativeAmount)
        );
        assert_eq!(event.status, EventStatus::Pending);

        event.status = EventStatus::Paid;
        assert_eq!(
            service.settle_paid_event(&mut event, date(2026, 5, 9)),
            Err(AgendaError::NegativeAmount)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_seeded_user_settles_every_event_type() {
        let user = UserId::new();
        let categories = Arc::new(InMemoryCategories::new(default_categories(user)));
        let ledger = Arc::new(InMemoryLedger::new());
        let service = EventService::new(Arc::clone(&ledger), Arc::clone(&categories));

        for event_type in [
            EventType::Class,
            EventType::Show,
            EventType::Freelance,
            EventType::Other,
        ] {
            let mut event =
                Event::new(user, "Gig", event_type, starts()).with_expected_amount(dec!(100));
            let SettlementOutcome::Created(id) = service
                .change_status(&mut event, EventStatus::Paid, date(2026, 5, 9))
                .unwrap()
            else {
                panic!("expected a created transaction for {event_type:?}");
            };

            let category_id = ledger.get(id).unwrap().category_id.unwrap();
            let category = categories.get(user, category_id).unwrap();
            assert_eq!(category.name, event_type.income_category());
            assert_eq!(category.category_type, CategoryType::Income);
        }
    }
}
