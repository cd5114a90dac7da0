//! Recurring budget schedules and their status for the current period.
//!
//! A schedule's period is resolved from its anchor date, spend is summed from
//! the ledger over that window, and the evaluator compares it to the limit.

pub mod error;
pub mod evaluator;
pub mod memory;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use evaluator::BudgetStatusEvaluator;
pub use memory::InMemorySchedules;
pub use service::{BudgetReportService, ScheduleSource};
pub use types::{
    BudgetStatus, BudgetStatusReport, DEFAULT_ALERT_THRESHOLD, RecurringSchedule, SkippedSchedule,
};
