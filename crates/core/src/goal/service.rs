//! Goal contributions.

use chrono::NaiveDate;
use finagenda_shared::types::TransactionId;
use rust_decimal::Decimal;
use tracing::info;

use super::error::GoalError;
use super::types::{Goal, GoalContribution, GoalStatus};

/// Goal service for business logic.
pub struct GoalService;

impl GoalService {
    /// Adds a contribution to an active goal.
    ///
    /// The goal is marked completed when the contribution reaches the target.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveAmount` for zero or negative amounts and
    /// `GoalError::NotActive` if the goal does not accept contributions.
    pub fn contribute(
        goal: &mut Goal,
        amount: Decimal,
        date: NaiveDate,
        transaction: Option<TransactionId>,
    ) -> Result<GoalContribution, GoalError> {
        if amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveAmount);
        }
        if goal.status != GoalStatus::Active {
            return Err(GoalError::NotActive(goal.status));
        }

        goal.current_amount += amount;
        if goal.is_achieved() {
            goal.status = GoalStatus::Completed;
            info!(goal_id = %goal.id, current = %goal.current_amount, "Goal achieved");
        }

        Ok(GoalContribution {
            goal_id: goal.id,
            amount,
            date,
            transaction,
        })
    }

    /// Checks a goal before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NegativeTarget` for a negative target.
    pub fn validate(goal: &Goal) -> Result<(), GoalError> {
        if goal.target_amount < Decimal::ZERO {
            return Err(GoalError::NegativeTarget);
        }
        Ok(())
    }
}
