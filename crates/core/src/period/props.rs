//! Property-based tests for period resolution.
//!
//! - Containment: the resolved window contains `today` once the schedule started
//! - Month-end clamping is per occurrence
//! - Resolution is a pure function

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use super::resolver::{PeriodResolver, shift_months};
use super::types::PeriodKind;

/// Strategy to generate dates between 2000-01-01 and roughly 2060.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy to generate period kinds.
fn any_kind() -> impl Strategy<Value = PeriodKind> {
    prop_oneof![
        Just(PeriodKind::Weekly),
        Just(PeriodKind::Monthly),
        Just(PeriodKind::Yearly),
    ]
}

fn is_leap(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For today >= anchor the window always contains today.
    #[test]
    fn prop_window_contains_today(
        anchor in any_date(),
        days_after in 0i64..4_000,
        kind in any_kind(),
    ) {
        let today = anchor + Duration::days(days_after);
        let window = PeriodResolver::resolve(anchor, kind, today).unwrap();

        prop_assert!(window.start_date <= today);
        prop_assert!(today <= window.end_date);
        prop_assert!(window.start_date <= window.end_date);
    }

    /// Window lengths follow the period kind.
    #[test]
    fn prop_window_length_matches_kind(
        anchor in any_date(),
        days_after in 0i64..4_000,
        kind in any_kind(),
    ) {
        let today = anchor + Duration::days(days_after);
        let window = PeriodResolver::resolve(anchor, kind, today).unwrap();
        let next_start = window.end_date.succ_opt().unwrap();

        match kind {
            PeriodKind::Weekly => prop_assert_eq!(window.len_days(), 7),
            PeriodKind::Monthly => {
                prop_assert!((28..=31).contains(&window.len_days()));
                prop_assert_eq!(
                    shift_months(window.start_date, 1).map(|d| d.month()),
                    Some(next_start.month())
                );
            }
            PeriodKind::Yearly => prop_assert!((365..=366).contains(&window.len_days())),
        }
    }

    /// Starts share the anchor's day-of-month unless the month is too short.
    #[test]
    fn prop_monthly_start_day_is_clamped_anchor_day(
        anchor in any_date(),
        days_after in 0i64..4_000,
    ) {
        let today = anchor + Duration::days(days_after);
        let window = PeriodResolver::resolve(anchor, PeriodKind::Monthly, today).unwrap();
        let start = window.start_date;
        let first_of_month = NaiveDate::from_ymd_opt(start.year(), start.month(), 1).unwrap();
        let last_day = shift_months(first_of_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap()
            .day();

        prop_assert_eq!(start.day(), anchor.day().min(last_day));
    }

    /// Month-end anchors clamp in February and recover in March.
    #[test]
    fn prop_month_end_anchor_clamp_is_per_occurrence(
        year in 2000i32..2060,
        day in 29u32..=31,
    ) {
        let anchor = NaiveDate::from_ymd_opt(year, 1, day).unwrap();
        let march_first = NaiveDate::from_ymd_opt(year, 3, 1).unwrap();
        let february = PeriodResolver::resolve(anchor, PeriodKind::Monthly, march_first).unwrap();
        let feb_last = if is_leap(year) { 29 } else { 28 };

        prop_assert_eq!(february.start_date.month(), 2);
        prop_assert_eq!(february.start_date.day(), day.min(feb_last));

        let march_end = NaiveDate::from_ymd_opt(year, 3, 31).unwrap();
        let march = PeriodResolver::resolve(anchor, PeriodKind::Monthly, march_end).unwrap();
        prop_assert_eq!(march.start_date, NaiveDate::from_ymd_opt(year, 3, day).unwrap());
    }

    /// Before the anchor the first window is returned.
    #[test]
    fn prop_future_anchor_yields_first_window(
        anchor in any_date(),
        days_before in 1i64..1_000,
        kind in any_kind(),
    ) {
        let today = anchor - Duration::days(days_before);
        let window = PeriodResolver::resolve(anchor, kind, today).unwrap();

        prop_assert_eq!(window.start_date, anchor);
        prop_assert_eq!(window, PeriodResolver::occurrence(anchor, kind, 0).unwrap());
    }

    /// Same inputs, same window.
    #[test]
    fn prop_resolution_is_idempotent(
        anchor in any_date(),
        today in any_date(),
        kind in any_kind(),
    ) {
        let first = PeriodResolver::resolve(anchor, kind, today).unwrap();
        let second = PeriodResolver::resolve(anchor, kind, today).unwrap();
        prop_assert_eq!(first, second);
    }
}
