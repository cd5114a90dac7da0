//! Alert rule and notification types.

use finagenda_shared::types::{AlertRuleId, BudgetId, CategoryId, GoalId, UserId};
use serde::{Deserialize, Serialize};

use crate::budget::DEFAULT_ALERT_THRESHOLD;

/// Condition an alert rule watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Spend crossed a percentage of the limit.
    BudgetThreshold,
    /// Spend reached the limit.
    BudgetExceeded,
    /// A goal reached its target.
    GoalAchieved,
}

/// A user's opt-in for one kind of alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRule {
    /// Rule ID.
    pub id: AlertRuleId,
    /// Owner.
    pub user_id: UserId,
    /// Watched condition.
    pub alert_type: AlertType,
    /// Disabled rules never fire.
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    /// Percent for threshold rules.
    #[serde(default)]
    pub threshold_percentage: Option<u8>,
    /// Restricts the rule to one category. `None` applies to all.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

fn default_enabled() -> bool {
    true
}

impl AlertRule {
    /// Creates an enabled rule for all categories.
    #[must_use]
    pub fn new(user_id: UserId, alert_type: AlertType) -> Self {
        Self {
            id: AlertRuleId::new(),
            user_id,
            alert_type,
            is_enabled: true,
            threshold_percentage: None,
            category_id: None,
        }
    }

    /// Threshold in percent, 80 when unset.
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold_percentage.unwrap_or(DEFAULT_ALERT_THRESHOLD)
    }

    /// True if the rule is enabled, of the given type, and covers `category_id`.
    #[must_use]
    pub fn applies_to(&self, alert_type: AlertType, category_id: CategoryId) -> bool {
        self.is_enabled
            && self.alert_type == alert_type
            && self.category_id.is_none_or(|id| id == category_id)
    }
}

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
    /// Good news.
    Success,
    /// Something went wrong.
    Error,
}

/// Urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Urgent.
    Urgent,
}

/// A notification ready to be stored for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Visual style.
    pub kind: NotificationKind,
    /// Urgency.
    pub priority: Priority,
    /// Page to open on click.
    pub action_url: String,
    /// Budget the notification is about.
    pub related_budget: Option<BudgetId>,
    /// Goal the notification is about.
    pub related_goal: Option<GoalId>,
}
