//! Budget status evaluation.

use rust_decimal::Decimal;

use super::types::{BudgetStatus, RecurringSchedule};
use crate::period::{PeriodKind, PeriodWindow};

/// Stateless evaluator turning a schedule and its spend into a status.
pub struct BudgetStatusEvaluator;

impl BudgetStatusEvaluator {
    /// Share of `limit` used by `spent`, in percent, unrounded.
    ///
    /// A zero limit yields zero. Results too large for `Decimal` saturate at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn percentage_used(spent: Decimal, limit: Decimal) -> Decimal {
        if limit.is_zero() {
            return Decimal::ZERO;
        }

        spent
            .checked_div(limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }

    /// Evaluates a schedule for the window in effect.
    ///
    /// The alert flag compares the unrounded percentage with the threshold;
    /// only the reported percentage is rounded to two decimals.
    #[must_use]
    pub fn evaluate(
        schedule: &RecurringSchedule,
        kind: PeriodKind,
        window: PeriodWindow,
        spent: Decimal,
    ) -> BudgetStatus {
        let limit = schedule.limit_amount;
        let percentage = Self::percentage_used(spent, limit);
        let threshold = Decimal::from(schedule.alert_threshold_percent);

        BudgetStatus {
            schedule_id: schedule.id,
            category_id: schedule.category_id,
            category_label: schedule.category_label.clone(),
            limit_amount: limit,
            spent_amount: spent,
            remaining_amount: limit - spent,
            percentage_used: percentage.round_dp(2),
            alert_threshold_percent: schedule.alert_threshold_percent,
            alert_reached: percentage >= threshold,
            period_kind: kind,
            period_start: window.start_date,
            period_end: window.end_date,
        }
    }
}
