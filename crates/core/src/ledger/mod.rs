//! Transaction ledger logic.
//!
//! This module implements the ledger side of budgeting:
//! - Transaction and category domain types
//! - Default categories for new users
//! - Repository traits the persistence layer implements
//! - An in-memory ledger for tools and tests
//! - Spend aggregation over a resolved period window
//! - Monthly income/expense summaries

pub mod aggregator;
pub mod defaults;
pub mod error;
pub mod memory;
pub mod repository;
pub mod summary;
pub mod transaction;
pub mod types;

pub use aggregator::SpendAggregator;
pub use defaults::default_categories;
pub use error::LedgerError;
pub use memory::{InMemoryCategories, InMemoryLedger};
pub use repository::{CategoryDirectory, LedgerRepository};
pub use summary::{CategoryTotal, MonthlySummary, month_window, monthly_summary, parse_month};
pub use transaction::{NewTransaction, Transaction};
pub use types::{Category, CategoryType, SpendTotal, TransactionType};
