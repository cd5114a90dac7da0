//! Budget status reports over a schedule source and a ledger.

use std::sync::Arc;

use chrono::NaiveDate;
use finagenda_shared::types::UserId;
use tracing::{debug, info, warn};

use super::error::BudgetError;
use super::evaluator::BudgetStatusEvaluator;
use super::types::{BudgetStatus, BudgetStatusReport, RecurringSchedule, SkippedSchedule};
use crate::ledger::{LedgerRepository, SpendAggregator};
use crate::period::PeriodResolver;

/// Source of a user's recurring schedules.
pub trait ScheduleSource: Send + Sync {
    /// All schedules of a user, active or not.
    fn schedules_for(&self, user_id: UserId) -> Result<Vec<RecurringSchedule>, BudgetError>;
}

/// Evaluates budget schedules against the ledger.
pub struct BudgetReportService<S: ScheduleSource, R: LedgerRepository> {
    schedules: Arc<S>,
    aggregator: SpendAggregator<R>,
}

impl<S: ScheduleSource, R: LedgerRepository> BudgetReportService<S, R> {
    /// Creates a new report service.
    #[must_use]
    pub fn new(schedules: Arc<S>, ledger: Arc<R>) -> Self {
        Self {
            schedules,
            aggregator: SpendAggregator::new(ledger),
        }
    }

    /// Statuses of every schedule active on `today`.
    ///
    /// A schedule with a bad period code or invalid stored values is listed
    /// in `skipped` and the rest are still evaluated.
    ///
    /// # Errors
    ///
    /// Returns the error unchanged if the schedule source or the ledger fails.
    pub fn status_report(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<BudgetStatusReport, BudgetError> {
        let schedules = self.schedules.schedules_for(user_id)?;
        let mut report = BudgetStatusReport::default();

        for schedule in schedules.iter().filter(|s| s.is_active_on(today)) {
            match self.status_for(schedule, today) {
                Ok(status) => report.statuses.push(status),
                Err(err) if err.is_schedule_local() => {
                    warn!(
                        schedule_id = %schedule.id,
                        period_type = %schedule.period_type,
                        error = %err,
                        "Skipping budget schedule"
                    );
                    report.skipped.push(SkippedSchedule {
                        schedule_id: schedule.id,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            user_id = %user_id,
            %today,
            evaluated = report.statuses.len(),
            skipped = report.skipped.len(),
            "Budget status report built"
        );

        Ok(report)
    }

    /// Status of a single schedule on `today`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if the schedule is invalid, its period cannot be
    /// resolved, or the ledger query fails.
    pub fn status_for(
        &self,
        schedule: &RecurringSchedule,
        today: NaiveDate,
    ) -> Result<BudgetStatus, BudgetError> {
        schedule.validate()?;
        let kind = schedule.period_kind()?;
        let window = PeriodResolver::resolve(schedule.anchor_date, kind, today)?;
        let spend = self
            .aggregator
            .spend_for(schedule.user_id, schedule.category_id, window)?;

        debug!(
            schedule_id = %schedule.id,
            start = %window.start_date,
            end = %window.end_date,
            spent = %spend.amount,
            "Evaluated budget schedule"
        );

        Ok(BudgetStatusEvaluator::evaluate(
            schedule,
            kind,
            window,
            spend.amount,
        ))
    }
}
