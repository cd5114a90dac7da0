//! Notification planning from budget statuses and goals.
//!
//! The planner only drafts notifications. Storing them and suppressing
//! repeats is left to the caller.

pub mod planner;
pub mod types;

pub use planner::AlertPlanner;
pub use types::{AlertRule, AlertType, NotificationDraft, NotificationKind, Priority};
