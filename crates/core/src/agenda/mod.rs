//! Agenda events and their settlement into income transactions.

pub mod error;
pub mod service;
pub mod types;

pub use error::AgendaError;
pub use service::{EventService, SettlementOutcome};
pub use types::{Event, EventStatus, EventType, FALLBACK_INCOME_CATEGORY};
