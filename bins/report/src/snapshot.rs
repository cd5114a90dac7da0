//! JSON snapshot of one user's data.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use finagenda_core::agenda::Event;
use finagenda_core::alerts::AlertRule;
use finagenda_core::budget::RecurringSchedule;
use finagenda_core::ledger::{Category, Transaction};
use finagenda_shared::types::{BudgetId, CategoryId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Everything the report needs, loaded from one file.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub user_id: UserId,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub alert_rules: Vec<AlertRule>,
}

/// Stored schedule whose threshold may be left to the configured default.
#[derive(Debug, Deserialize)]
pub struct ScheduleRecord {
    pub id: BudgetId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_label: String,
    pub anchor_date: NaiveDate,
    pub period_type: String,
    pub limit_amount: Decimal,
    #[serde(default)]
    pub alert_threshold_percent: Option<u8>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl ScheduleRecord {
    /// Builds the schedule for `user_id`, filling the threshold from `default_threshold`.
    pub fn into_schedule(self, user_id: UserId, default_threshold: u8) -> RecurringSchedule {
        RecurringSchedule {
            id: self.id,
            user_id,
            category_id: self.category_id,
            category_label: self.category_label,
            anchor_date: self.anchor_date,
            period_type: self.period_type,
            limit_amount: self.limit_amount,
            alert_threshold_percent: self.alert_threshold_percent.unwrap_or(default_threshold),
            is_active: self.is_active,
            end_date: self.end_date,
        }
    }
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    /// Parses snapshot JSON.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
