//! Resolution of the current occurrence of a recurring schedule.

use chrono::{Datelike, Duration, Months, NaiveDate};

use super::error::PeriodError;
use super::types::{PeriodKind, PeriodWindow};

/// Shifts a date by whole calendar months, clamping the day-of-month.
///
/// The resulting day is `min(date.day(), last day of the target month)`.
/// Returns `None` when the result leaves chrono's supported range.
#[must_use]
pub fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

/// Stateless resolver for recurring period windows.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Resolves the window in effect on `today`.
    ///
    /// When `today` precedes the anchor the first window is returned,
    /// starting exactly at `anchor`. Otherwise the returned window always
    /// satisfies `start_date <= today <= end_date`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::DateOutOfRange` if the arithmetic leaves the
    /// representable calendar.
    pub fn resolve(
        anchor: NaiveDate,
        kind: PeriodKind,
        today: NaiveDate,
    ) -> Result<PeriodWindow, PeriodError> {
        if today < anchor {
            return Self::occurrence(anchor, kind, 0);
        }

        let index = match kind.months_per_period() {
            None => (today - anchor).num_days() / 7,
            Some(step) => Self::elapsed_month_steps(anchor, today, i64::from(step))?,
        };

        Self::occurrence(anchor, kind, index)
    }

    /// Resolves a window from a stored period code.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidPeriodKind` for unknown codes.
    pub fn resolve_code(
        anchor: NaiveDate,
        period_code: &str,
        today: NaiveDate,
    ) -> Result<PeriodWindow, PeriodError> {
        let kind = period_code.parse::<PeriodKind>()?;
        Self::resolve(anchor, kind, today)
    }

    /// Returns the `index`-th occurrence (zero-based) of a schedule.
    ///
    /// Each occurrence is projected from the anchor, so a clamped start in a
    /// short month never carries over into later occurrences.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::DateOutOfRange` if the arithmetic overflows.
    pub fn occurrence(
        anchor: NaiveDate,
        kind: PeriodKind,
        index: i64,
    ) -> Result<PeriodWindow, PeriodError> {
        let out_of_range = || PeriodError::DateOutOfRange(anchor);

        match kind.months_per_period() {
            None => {
                let offset = index.checked_mul(7).ok_or_else(out_of_range)?;
                let start_date = anchor
                    .checked_add_signed(Duration::days(offset))
                    .ok_or_else(out_of_range)?;
                let end_date = start_date
                    .checked_add_signed(Duration::days(6))
                    .ok_or_else(out_of_range)?;
                Ok(PeriodWindow {
                    start_date,
                    end_date,
                })
            }
            Some(step) => {
                let step = i64::from(step);
                let start_offset = index.checked_mul(step).ok_or_else(out_of_range)?;
                let next_offset = start_offset.checked_add(step).ok_or_else(out_of_range)?;

                let start_date = shift_months(anchor, start_offset).ok_or_else(out_of_range)?;
                let end_date = shift_months(anchor, next_offset)
                    .and_then(|next_start| next_start.pred_opt())
                    .ok_or_else(out_of_range)?;
                Ok(PeriodWindow {
                    start_date,
                    end_date,
                })
            }
        }
    }

    /// Counts whole month-based periods between `anchor` and `today`.
    ///
    /// Requires `today >= anchor`.
    fn elapsed_month_steps(
        anchor: NaiveDate,
        today: NaiveDate,
        step: i64,
    ) -> Result<i64, PeriodError> {
        let months = i64::from(today.year() - anchor.year()) * 12
            + i64::from(today.month())
            - i64::from(anchor.month());
        let mut steps = months / step;

        let candidate =
            shift_months(anchor, steps * step).ok_or(PeriodError::DateOutOfRange(anchor))?;
        if candidate > today {
            steps -= 1;
        }

        Ok(steps)
    }
}
