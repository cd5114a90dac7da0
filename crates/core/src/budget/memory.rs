//! In-memory schedule source.

use dashmap::DashMap;
use finagenda_shared::types::{BudgetId, UserId};

use super::error::BudgetError;
use super::service::ScheduleSource;
use super::types::RecurringSchedule;

/// Schedules keyed by ID.
#[derive(Debug, Default)]
pub struct InMemorySchedules {
    schedules: DashMap<BudgetId, RecurringSchedule>,
}

impl InMemorySchedules {
    /// Creates a source from a list of schedules.
    #[must_use]
    pub fn new(schedules: impl IntoIterator<Item = RecurringSchedule>) -> Self {
        Self {
            schedules: schedules.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Adds or replaces a schedule.
    pub fn upsert(&self, schedule: RecurringSchedule) {
        self.schedules.insert(schedule.id, schedule);
    }
}

impl ScheduleSource for InMemorySchedules {
    fn schedules_for(&self, user_id: UserId) -> Result<Vec<RecurringSchedule>, BudgetError> {
        let mut found: Vec<RecurringSchedule> = self
            .schedules
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| {
            a.category_label
                .cmp(&b.category_label)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(found)
    }
}
