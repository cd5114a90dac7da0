//! Budget data types.

use chrono::NaiveDate;
use finagenda_shared::types::{BudgetId, CategoryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use crate::period::PeriodKind;

/// Alert threshold applied when none is configured.
pub const DEFAULT_ALERT_THRESHOLD: u8 = 80;

/// A spending limit for one category that repeats on a fixed cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringSchedule {
    /// Schedule ID.
    pub id: BudgetId,
    /// Owner.
    pub user_id: UserId,
    /// Expense category the limit applies to.
    pub category_id: CategoryId,
    /// Category name shown in reports.
    #[serde(default)]
    pub category_label: String,
    /// Start of the first period. Later periods are projected from it.
    pub anchor_date: NaiveDate,
    /// Stored period code (`WEEKLY`, `MONTHLY`, `YEARLY`).
    pub period_type: String,
    /// Spending limit per period.
    pub limit_amount: Decimal,
    /// Percent of the limit at which an alert is raised.
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold_percent: u8,
    /// Inactive schedules are never evaluated.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Last day the schedule applies, if bounded.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn default_alert_threshold() -> u8 {
    DEFAULT_ALERT_THRESHOLD
}

fn default_active() -> bool {
    true
}

impl RecurringSchedule {
    /// Creates an active, unbounded schedule.
    #[must_use]
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        category_label: impl Into<String>,
        anchor_date: NaiveDate,
        kind: PeriodKind,
        limit_amount: Decimal,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            user_id,
            category_id,
            category_label: category_label.into(),
            anchor_date,
            period_type: kind.code().to_string(),
            limit_amount,
            alert_threshold_percent: DEFAULT_ALERT_THRESHOLD,
            is_active: true,
            end_date: None,
        }
    }

    /// Sets the alert threshold.
    #[must_use]
    pub const fn with_threshold(mut self, percent: u8) -> Self {
        self.alert_threshold_percent = percent;
        self
    }

    /// Bounds the schedule with a last day.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Checks the stored values.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.limit_amount < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit(self.limit_amount));
        }
        if self.alert_threshold_percent > 100 {
            return Err(BudgetError::ThresholdOutOfRange(
                self.alert_threshold_percent,
            ));
        }
        if let Some(end_date) = self.end_date
            && end_date < self.anchor_date
        {
            return Err(BudgetError::EndBeforeAnchor {
                anchor_date: self.anchor_date,
                end_date,
            });
        }
        Ok(())
    }

    /// True if the schedule should be evaluated on `today`.
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.is_active && self.end_date.is_none_or(|end| end >= today)
    }

    /// Parses the stored period code.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Period` for unknown codes.
    pub fn period_kind(&self) -> Result<PeriodKind, BudgetError> {
        Ok(self.period_type.parse()?)
    }
}

/// Evaluated state of one schedule for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// Evaluated schedule.
    pub schedule_id: BudgetId,
    /// Category the limit applies to.
    pub category_id: CategoryId,
    /// Category name.
    pub category_label: String,
    /// Limit for the period.
    pub limit_amount: Decimal,
    /// Confirmed spend in the period.
    pub spent_amount: Decimal,
    /// `limit - spent`, negative when overspent.
    pub remaining_amount: Decimal,
    /// Share of the limit used, rounded to two decimals.
    pub percentage_used: Decimal,
    /// Configured alert threshold.
    pub alert_threshold_percent: u8,
    /// Unrounded percentage reached the threshold.
    pub alert_reached: bool,
    /// Period cadence.
    pub period_kind: PeriodKind,
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Last day of the period.
    pub period_end: NaiveDate,
}

impl BudgetStatus {
    /// True when spend is at or above the limit.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        !self.limit_amount.is_zero() && self.spent_amount >= self.limit_amount
    }
}

/// A schedule left out of a report, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSchedule {
    /// Schedule ID.
    pub schedule_id: BudgetId,
    /// Human-readable reason.
    pub reason: String,
}

/// Statuses of all active schedules of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatusReport {
    /// Evaluated schedules, in source order.
    pub statuses: Vec<BudgetStatus>,
    /// Schedules that could not be evaluated.
    pub skipped: Vec<SkippedSchedule>,
}

impl BudgetStatusReport {
    /// Statuses with the alert flag set.
    pub fn alerts(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.statuses.iter().filter(|status| status.alert_reached)
    }
}
