//! Drafting notifications from evaluated budgets and goals.

use rust_decimal::Decimal;

use super::types::{AlertRule, AlertType, NotificationDraft, NotificationKind, Priority};
use crate::budget::{BudgetStatus, BudgetStatusEvaluator};
use crate::goal::{Goal, GoalStatus};
use crate::ledger::types::format_amount as money;

/// Stateless alert planner.
pub struct AlertPlanner;

impl AlertPlanner {
    /// Notifications triggered by one budget status.
    ///
    /// At most one threshold warning is drafted, when any matching rule's
    /// threshold is reached while spend is still under 100%. At 100% or more an
    /// exceeded error is drafted if an exceeded rule applies.
    #[must_use]
    pub fn budget_alerts(status: &BudgetStatus, rules: &[AlertRule]) -> Vec<NotificationDraft> {
        let pct = BudgetStatusEvaluator::percentage_used(status.spent_amount, status.limit_amount);
        let mut drafts = Vec::new();

        let threshold_hit = rules
            .iter()
            .filter(|rule| rule.applies_to(AlertType::BudgetThreshold, status.category_id))
            .any(|rule| pct >= Decimal::from(rule.threshold()) && pct < Decimal::ONE_HUNDRED);
        if threshold_hit {
            drafts.push(NotificationDraft {
                title: format!(
                    "{} budget reached {}%",
                    status.category_label,
                    pct.round_dp(0)
                ),
                message: format!(
                    "You spent {} of {} this period.",
                    money(status.spent_amount),
                    money(status.limit_amount)
                ),
                kind: NotificationKind::Warning,
                priority: Priority::Medium,
                action_url: "/budgets".to_string(),
                related_budget: Some(status.schedule_id),
                related_goal: None,
            });
        }

        let exceeded_rule = rules
            .iter()
            .any(|rule| rule.applies_to(AlertType::BudgetExceeded, status.category_id));
        if pct >= Decimal::ONE_HUNDRED && exceeded_rule {
            drafts.push(NotificationDraft {
                title: format!("{} budget exceeded!", status.category_label),
                message: format!(
                    "You spent {}, {}% over the limit of {}.",
                    money(status.spent_amount),
                    (pct - Decimal::ONE_HUNDRED).round_dp(0),
                    money(status.limit_amount)
                ),
                kind: NotificationKind::Error,
                priority: Priority::High,
                action_url: "/budgets".to_string(),
                related_budget: Some(status.schedule_id),
                related_goal: None,
            });
        }

        drafts
    }

    /// Notification for a goal that was just completed.
    ///
    /// Call after a contribution; nothing is drafted unless the goal is
    /// completed and an enabled goal rule exists.
    #[must_use]
    pub fn goal_alerts(goal: &Goal, rules: &[AlertRule]) -> Vec<NotificationDraft> {
        let enabled = rules
            .iter()
            .any(|rule| rule.is_enabled && rule.alert_type == AlertType::GoalAchieved);
        if !enabled || goal.status != GoalStatus::Completed || !goal.is_achieved() {
            return Vec::new();
        }

        vec![NotificationDraft {
            title: format!("Goal '{}' achieved!", goal.name),
            message: format!(
                "Congratulations! You reached {} of {}.",
                money(goal.current_amount),
                money(goal.target_amount)
            ),
            kind: NotificationKind::Success,
            priority: Priority::High,
            action_url: "/goals".to_string(),
            related_budget: None,
            related_goal: Some(goal.id),
        }]
    }
}
