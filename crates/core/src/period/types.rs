//! Period kinds and resolved windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// How often a recurring schedule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodKind {
    /// Seven-day periods.
    Weekly,
    /// Calendar-month periods.
    Monthly,
    /// Twelve-calendar-month periods.
    Yearly,
}

impl PeriodKind {
    /// Stored code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Calendar months per occurrence, `None` for day-based kinds.
    #[must_use]
    pub const fn months_per_period(self) -> Option<u32> {
        match self {
            Self::Weekly => None,
            Self::Monthly => Some(1),
            Self::Yearly => Some(12),
        }
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PeriodKind {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WEEKLY" => Ok(Self::Weekly),
            "MONTHLY" => Ok(Self::Monthly),
            "YEARLY" => Ok(Self::Yearly),
            _ => Err(PeriodError::InvalidPeriodKind(s.to_string())),
        }
    }
}

/// One occurrence of a recurring schedule.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day of the occurrence.
    pub start_date: NaiveDate,
    /// Last day of the occurrence.
    pub end_date: NaiveDate,
}

impl PeriodWindow {
    /// Returns true if the given date falls within this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
