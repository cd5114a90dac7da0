//! Typed IDs for the entities a user owns.
//!
//! A schedule, a category and a transaction are all UUIDs underneath; the
//! wrappers keep a `BudgetId` from being passed where a `CategoryId` belongs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares one or more UUID-backed ID newtypes.
macro_rules! typed_ids {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(Uuid);

            impl $name {
                /// Fresh time-ordered (v7) ID.
                #[must_use]
                pub fn new() -> Self {
                    Self(Uuid::now_v7())
                }

                /// Wraps a stored UUID.
                #[must_use]
                pub const fn from_uuid(uuid: Uuid) -> Self {
                    Self(uuid)
                }

                /// Borrows the underlying UUID.
                #[must_use]
                pub const fn as_uuid(&self) -> &Uuid {
                    &self.0
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl From<Uuid> for $name {
                fn from(uuid: Uuid) -> Self {
                    Self(uuid)
                }
            }

            impl From<$name> for Uuid {
                fn from(id: $name) -> Self {
                    id.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.0, f)
                }
            }

            impl std::str::FromStr for $name {
                type Err = uuid::Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Uuid::parse_str(s).map(Self)
                }
            }
        )+
    };
}

typed_ids! {
    /// Owner of every other entity.
    UserId;
    /// Money account (cash, bank, card).
    AccountId;
    /// Income or expense category.
    CategoryId;
    /// Ledger transaction.
    TransactionId;
    /// Recurring budget schedule.
    BudgetId;
    /// Savings or payoff goal.
    GoalId;
    /// Agenda event.
    EventId;
    /// Alert rule.
    AlertRuleId;
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
