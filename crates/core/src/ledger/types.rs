//! Ledger domain types.

use finagenda_shared::types::{CategoryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::PeriodWindow;

/// Direction of money for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

/// Category classification. Mirrors `TransactionType`.
pub type CategoryType = TransactionType;

/// A user-defined transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owner.
    pub user_id: UserId,
    /// Display name, unique per user and type.
    pub name: String,
    /// Income or expense.
    pub category_type: CategoryType,
    /// Hex color used by the UI.
    #[serde(default = "default_color")]
    pub color: String,
    /// Grouping label (e.g. "Housing").
    #[serde(default)]
    pub group: String,
    /// Essential spending (rent, groceries).
    #[serde(default)]
    pub is_essential: bool,
}

fn default_color() -> String {
    "#6366f1".to_string()
}

/// Confirmed expense total for one category within one window.
///
/// Computed on demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendTotal {
    /// Category the total belongs to.
    pub category_id: CategoryId,
    /// Window the total covers.
    pub window: PeriodWindow,
    /// Sum of confirmed expense amounts.
    pub amount: Decimal,
}

/// Formats an amount with exactly two decimals.
pub(crate) fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}
