//! CLI argument definitions using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Finagenda report - budget status and month summaries from a snapshot
#[derive(Debug, Parser)]
#[command(name = "finagenda-report")]
#[command(about = "Evaluate budgets for one user from a JSON snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file (user, categories, schedules, transactions, events)
    pub snapshot: PathBuf,

    /// Evaluate as of this date (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Report to print, `status` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Budget status of every active schedule
    Status,

    /// Income, expenses and top categories of one month
    Month {
        /// Month as YYYY-MM
        month: String,
    },

    /// Notification drafts for the current budget statuses
    Alerts,
}
