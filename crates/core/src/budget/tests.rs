//! Tests for budget evaluation and reports.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use finagenda_shared::types::{CategoryId, TransactionId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::BudgetError;
use super::evaluator::BudgetStatusEvaluator;
use super::memory::InMemorySchedules;
use super::service::{BudgetReportService, ScheduleSource};
use super::types::RecurringSchedule;
use crate::ledger::{InMemoryLedger, LedgerError, LedgerRepository, Transaction, TransactionType};
use crate::period::{PeriodKind, PeriodWindow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(
    user_id: UserId,
    category_id: CategoryId,
    amount: Decimal,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id,
        transaction_type: TransactionType::Expense,
        amount,
        date: on,
        description: "card payment".to_string(),
        category_id: Some(category_id),
        account_id: None,
        tags: String::new(),
        notes: String::new(),
        is_confirmed: true,
        source_event: None,
        ai_categorized: false,
        ai_confidence: None,
    }
}

proptest! {
    /// remaining = limit - spent for any amounts.
    #[test]
    fn prop_remaining_is_limit_minus_spent(
        limit_cents in 0i64..100_000_000,
        spent_cents in 0i64..100_000_000,
    ) {
        let limit = Decimal::new(limit_cents, 2);
        let spent = Decimal::new(spent_cents, 2);
        let schedule = RecurringSchedule::new(
            UserId::new(), CategoryId::new(), "Any", date(2026, 1, 1), PeriodKind::Monthly, limit,
        );
        let window = PeriodWindow { start_date: date(2026, 1, 1), end_date: date(2026, 1, 31) };

        let status = BudgetStatusEvaluator::evaluate(&schedule, PeriodKind::Monthly, window, spent);

        prop_assert_eq!(status.remaining_amount, limit - spent);
    }

    /// Zero limit always reports zero percent.
    #[test]
    fn prop_zero_limit_reports_zero_percent(spent_cents in 0i64..100_000_000) {
        let spent = Decimal::new(spent_cents, 2);
        prop_assert_eq!(
            BudgetStatusEvaluator::percentage_used(spent, Decimal::ZERO),
            Decimal::ZERO
        );
    }

    /// Alert flag matches the unrounded comparison and the display value is rounded.
    #[test]
    fn prop_alert_matches_unrounded_percentage(
        limit_cents in 1i64..100_000_000,
        spent_cents in 0i64..200_000_000,
        threshold in 0u8..=100,
    ) {
        let limit = Decimal::new(limit_cents, 2);
        let spent = Decimal::new(spent_cents, 2);
        let schedule = RecurringSchedule::new(
            UserId::new(), CategoryId::new(), "Any", date(2026, 1, 1), PeriodKind::Weekly, limit,
        )
        .with_threshold(threshold);
        let window = PeriodWindow { start_date: date(2026, 1, 1), end_date: date(2026, 1, 7) };

        let status = BudgetStatusEvaluator::evaluate(&schedule, PeriodKind::Weekly, window, spent);
        let raw = spent / limit * dec!(100);

        prop_assert_eq!(status.alert_reached, raw >= Decimal::from(threshold));
        prop_assert_eq!(status.percentage_used, raw.round_dp(2));
        prop_assert!(status.percentage_used.scale() <= 2);
    }
}

#[test]
fn test_report_uses_resolved_window() {
    let user = UserId::new();
    let groceries = CategoryId::new();
    let schedule = RecurringSchedule::new(
        user,
        groceries,
        "Groceries",
        date(2026, 1, 31),
        PeriodKind::Monthly,
        dec!(200.00),
    );
    let ledger = InMemoryLedger::with_transactions([
        expense(user, groceries, dec!(30.00), date(2026, 1, 31)),
        expense(user, groceries, dec!(20.00), date(2026, 2, 27)),
        expense(user, groceries, dec!(500.00), date(2026, 2, 28)),
    ])
    .unwrap();
    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([schedule])),
        Arc::new(ledger),
    );

    let report = service.status_report(user, date(2026, 2, 15)).unwrap();

    assert_eq!(report.statuses.len(), 1);
    let status = &report.statuses[0];
    assert_eq!(status.period_start, date(2026, 1, 31));
    assert_eq!(status.period_end, date(2026, 2, 27));
    assert_eq!(status.spent_amount, dec!(50.00));
    assert_eq!(status.percentage_used, dec!(25.00));
    assert!(!status.alert_reached);
}

#[test]
fn test_invalid_period_kind_skips_only_that_schedule() {
    let user = UserId::new();
    let good = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Transport",
        date(2026, 1, 1),
        PeriodKind::Weekly,
        dec!(50),
    );
    let mut bad = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Leisure",
        date(2026, 1, 1),
        PeriodKind::Monthly,
        dec!(80),
    );
    bad.period_type = "FORTNIGHTLY".to_string();
    let bad_id = bad.id;

    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([good, bad])),
        Arc::new(InMemoryLedger::new()),
    );

    let report = service.status_report(user, date(2026, 3, 3)).unwrap();

    assert_eq!(report.statuses.len(), 1);
    assert_eq!(report.statuses[0].category_label, "Transport");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].schedule_id, bad_id);
    assert!(report.skipped[0].reason.contains("FORTNIGHTLY"));
}

#[test]
fn test_inactive_and_ended_schedules_are_not_reported() {
    let user = UserId::new();
    let mut paused = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Paused",
        date(2026, 1, 1),
        PeriodKind::Monthly,
        dec!(10),
    );
    paused.is_active = false;
    let ended = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Ended",
        date(2026, 1, 1),
        PeriodKind::Monthly,
        dec!(10),
    )
    .with_end_date(date(2026, 2, 28));

    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([paused, ended])),
        Arc::new(InMemoryLedger::new()),
    );

    let report = service.status_report(user, date(2026, 3, 1)).unwrap();
    assert!(report.statuses.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn test_future_anchor_reports_first_window() {
    let user = UserId::new();
    let schedule = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Travel",
        date(2026, 12, 1),
        PeriodKind::Yearly,
        dec!(3000),
    );
    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([schedule])),
        Arc::new(InMemoryLedger::new()),
    );

    let report = service.status_report(user, date(2026, 10, 17)).unwrap();
    assert_eq!(report.statuses[0].period_start, date(2026, 12, 1));
    assert_eq!(report.statuses[0].period_end, date(2027, 11, 30));
    assert_eq!(report.statuses[0].spent_amount, Decimal::ZERO);
}

struct DownLedger;

impl LedgerRepository for DownLedger {
    fn sum_confirmed_expenses(
        &self,
        _user_id: UserId,
        _category_id: CategoryId,
        _window: &PeriodWindow,
    ) -> Result<Decimal, LedgerError> {
        Err(LedgerError::Unavailable("timeout".to_string()))
    }

    fn confirmed_in_range(
        &self,
        _user_id: UserId,
        _window: &PeriodWindow,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Err(LedgerError::Unavailable("timeout".to_string()))
    }

    fn insert(&self, _transaction: Transaction) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("timeout".to_string()))
    }
}

struct DownSource;

impl ScheduleSource for DownSource {
    fn schedules_for(&self, _user_id: UserId) -> Result<Vec<RecurringSchedule>, BudgetError> {
        Err(BudgetError::SourceUnavailable("disk full".to_string()))
    }
}

#[test]
fn test_ledger_failure_aborts_report() {
    let user = UserId::new();
    let schedule = RecurringSchedule::new(
        user,
        CategoryId::new(),
        "Rent",
        date(2026, 1, 1),
        PeriodKind::Monthly,
        dec!(1200),
    );
    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([schedule])),
        Arc::new(DownLedger),
    );

    let err = service.status_report(user, date(2026, 2, 1)).unwrap_err();
    assert_eq!(
        err,
        BudgetError::Ledger(LedgerError::Unavailable("timeout".to_string()))
    );
}

#[test]
fn test_source_failure_aborts_report() {
    let service = BudgetReportService::new(Arc::new(DownSource), Arc::new(InMemoryLedger::new()));
    let err = service
        .status_report(UserId::new(), date(2026, 2, 1))
        .unwrap_err();
    assert!(matches!(err, BudgetError::SourceUnavailable(_)));
}

#[test]
fn test_weekly_report_excludes_previous_week() {
    let user = UserId::new();
    let category = CategoryId::new();
    let anchor = date(2026, 1, 5);
    let schedule = RecurringSchedule::new(
        user,
        category,
        "Coffee",
        anchor,
        PeriodKind::Weekly,
        dec!(20),
    );
    let ledger = InMemoryLedger::with_transactions([
        expense(user, category, dec!(4.50), anchor + Duration::days(13)),
        expense(user, category, dec!(3.00), anchor + Duration::days(14)),
        expense(user, category, dec!(5.00), anchor + Duration::days(20)),
    ])
    .unwrap();
    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([schedule.clone()])),
        Arc::new(ledger),
    );

    let status = service.status_for(&schedule, date(2026, 1, 22)).unwrap();

    assert_eq!(status.period_start, date(2026, 1, 19));
    assert_eq!(status.spent_amount, dec!(8.00));
    assert_eq!(status.percentage_used, dec!(40.00));
}

#[test]
fn test_upserted_schedule_replaces_previous_limit() {
    let user = UserId::new();
    let category = CategoryId::new();
    let mut schedule = RecurringSchedule::new(
        user,
        category,
        "Gear",
        date(2026, 1, 1),
        PeriodKind::Monthly,
        dec!(100),
    );
    let schedules = Arc::new(InMemorySchedules::default());
    schedules.upsert(schedule.clone());
    let ledger = InMemoryLedger::with_transactions([expense(
        user,
        category,
        dec!(90),
        date(2026, 3, 10),
    )])
    .unwrap();
    let service = BudgetReportService::new(Arc::clone(&schedules), Arc::new(ledger));

    let before = service.status_report(user, date(2026, 3, 15)).unwrap();
    assert!(before.statuses[0].alert_reached);

    schedule.limit_amount = dec!(300);
    schedules.upsert(schedule);
    let after = service.status_report(user, date(2026, 3, 15)).unwrap();

    assert_eq!(after.statuses.len(), 1);
    assert_eq!(after.statuses[0].limit_amount, dec!(300));
    assert_eq!(after.statuses[0].percentage_used, dec!(30.00));
    assert!(!after.statuses[0].alert_reached);
}

#[test]
fn test_parallel_reports_match_sequential_baseline_during_inserts() {
    const READERS: usize = 4;
    const ROUNDS: usize = 50;
    const WRITES: usize = 500;

    let user = UserId::new();
    let groceries = CategoryId::new();
    let fuel = CategoryId::new();
    let today = date(2026, 3, 15);
    let ledger = Arc::new(
        InMemoryLedger::with_transactions([
            expense(user, groceries, dec!(120.00), date(2026, 3, 2)),
            expense(user, groceries, dec!(45.50), date(2026, 3, 14)),
            expense(user, fuel, dec!(60.00), date(2026, 3, 9)),
        ])
        .unwrap(),
    );
    let service = BudgetReportService::new(
        Arc::new(InMemorySchedules::new([
            RecurringSchedule::new(
                user,
                groceries,
                "Groceries",
                date(2026, 1, 1),
                PeriodKind::Monthly,
                dec!(200),
            ),
            RecurringSchedule::new(
                user,
                fuel,
                "Fuel",
                date(2026, 3, 9),
                PeriodKind::Weekly,
                dec!(50),
            ),
        ])),
        Arc::clone(&ledger),
    );
    let baseline = service.status_report(user, today).unwrap();
    assert_eq!(baseline.statuses.len(), 2);

    std::thread::scope(|scope| {
        // Writes touch the same categories but never the evaluated windows
        // of this user, so every report must equal the baseline.
        scope.spawn(|| {
            let other_user = UserId::new();
            for i in 0..WRITES {
                let (owner, on) = if i % 2 == 0 {
                    (other_user, date(2026, 3, 10))
                } else {
                    (user, date(2026, 2, 27))
                };
                ledger
                    .insert(expense(owner, groceries, dec!(1.00), on))
                    .unwrap();
            }
        });

        for _ in 0..READERS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    assert_eq!(service.status_report(user, today).unwrap(), baseline);
                }
            });
        }
    });

    assert_eq!(ledger.len(), 3 + WRITES);
    assert_eq!(service.status_report(user, today).unwrap(), baseline);
}

