//! Goal data types.

use chrono::NaiveDate;
use finagenda_shared::types::{AccountId, GoalId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the goal saves for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    /// General savings.
    #[default]
    Savings,
    /// Paying off a debt.
    DebtPayoff,
    /// Building an investment.
    Investment,
    /// A planned purchase.
    Purchase,
    /// Emergency fund.
    Emergency,
    /// User-defined.
    Custom,
}

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// Accepting contributions.
    #[default]
    Active,
    /// Target reached.
    Completed,
    /// Temporarily on hold.
    Paused,
    /// Abandoned.
    Cancelled,
}

/// A savings target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID.
    pub id: GoalId,
    /// Owner.
    pub user_id: UserId,
    /// Name.
    pub name: String,
    /// Kind of goal.
    #[serde(default)]
    pub goal_type: GoalType,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far.
    #[serde(default)]
    pub current_amount: Decimal,
    /// Desired completion date.
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: GoalStatus,
    /// Account holding the savings.
    #[serde(default)]
    pub linked_account: Option<AccountId>,
}

impl Goal {
    /// Creates an active goal with nothing saved.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            id: GoalId::new(),
            user_id,
            name: name.into(),
            goal_type: GoalType::Savings,
            target_amount,
            current_amount: Decimal::ZERO,
            target_date: None,
            status: GoalStatus::Active,
            linked_account: None,
        }
    }

    /// Progress in percent, capped at 100 and rounded to two decimals.
    ///
    /// A zero target counts as complete.
    #[must_use]
    pub fn progress_percentage(&self) -> Decimal {
        if self.target_amount.is_zero() {
            return Decimal::ONE_HUNDRED;
        }
        self.current_amount
            .checked_div(self.target_amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ONE_HUNDRED, |pct| pct.min(Decimal::ONE_HUNDRED))
            .round_dp(2)
    }

    /// Amount still missing, never negative.
    #[must_use]
    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }

    /// True once the target is reached.
    #[must_use]
    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Money put towards a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalContribution {
    /// Goal receiving the money.
    pub goal_id: GoalId,
    /// Contributed amount.
    pub amount: Decimal,
    /// Contribution date.
    pub date: NaiveDate,
    /// Ledger transaction backing the contribution.
    pub transaction: Option<TransactionId>,
}
