//! Core business logic for Finagenda.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached through repository traits; `today` is always a parameter.
//!
//! # Modules
//!
//! - `period` - Recurring period windows (weekly, monthly, yearly)
//! - `ledger` - Transactions, categories, spend aggregation and monthly summaries
//! - `budget` - Recurring budget schedules and their current status
//! - `agenda` - Paid events and their settlement into income
//! - `goal` - Savings goals and contributions
//! - `alerts` - Notification drafts for budgets and goals
//! - `assistant` - LLM prompt building and response parsing

pub mod agenda;
pub mod alerts;
pub mod assistant;
pub mod budget;
pub mod goal;
pub mod ledger;
pub mod period;
