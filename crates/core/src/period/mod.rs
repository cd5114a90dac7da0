//! Recurring period resolution.
//!
//! A recurring schedule starts on an anchor date and repeats every week,
//! calendar month, or calendar year. This module maps an anchor, a period
//! kind, and an explicit "today" onto the concrete date window of the
//! occurrence in effect.
//!
//! Month and year steps are always projected from the anchor, with the
//! day-of-month clamped to the target month's last day. A schedule anchored
//! on the 31st therefore starts on the 28th/29th in February and returns to
//! the 31st in March.

pub mod error;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod props;

pub use error::PeriodError;
pub use resolver::{PeriodResolver, shift_months};
pub use types::{PeriodKind, PeriodWindow};
