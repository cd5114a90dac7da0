//! Finagenda report
//!
//! Evaluates budgets and month summaries for one user from a JSON snapshot.
//!
//! ```text
//! finagenda-report <snapshot.json> [status | month YYYY-MM | alerts] [--today YYYY-MM-DD]
//! ```

mod cli;
mod snapshot;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finagenda_core::agenda::{EventService, EventStatus, SettlementOutcome};
use finagenda_core::alerts::{AlertPlanner, NotificationDraft};
use finagenda_core::budget::{BudgetReportService, InMemorySchedules};
use finagenda_core::ledger::{
    CategoryDirectory, InMemoryCategories, InMemoryLedger, LedgerRepository, month_window,
    monthly_summary, parse_month,
};
use finagenda_shared::AppConfig;

use crate::cli::{Cli, Commands};
use crate::snapshot::Snapshot;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let snapshot = Snapshot::load(&cli.snapshot)?;
    let user_id = snapshot.user_id;
    info!(
        %user_id,
        transactions = snapshot.transactions.len(),
        schedules = snapshot.schedules.len(),
        events = snapshot.events.len(),
        "Snapshot loaded"
    );

    let ledger = Arc::new(InMemoryLedger::with_transactions(snapshot.transactions)?);
    let seed_defaults = snapshot.categories.is_empty();
    let categories = Arc::new(InMemoryCategories::new(snapshot.categories));
    if seed_defaults {
        let seeded = categories.ensure_defaults(user_id);
        info!(seeded, "Snapshot has no categories, seeded defaults");
    }
    let schedules = Arc::new(InMemorySchedules::new(
        snapshot.schedules.into_iter().map(|record| {
            record.into_schedule(user_id, config.budget.default_alert_threshold)
        }),
    ));

    // Paid events that were never booked still count as income
    let events = EventService::new(Arc::clone(&ledger), Arc::clone(&categories));
    let mut settled = 0usize;
    for mut event in snapshot.events {
        if event.user_id != user_id || event.status != EventStatus::Paid {
            continue;
        }
        if let SettlementOutcome::Created(_) = events.settle_paid_event(&mut event, today)? {
            settled += 1;
        }
    }
    if settled > 0 {
        info!(settled, "Paid events settled");
    }

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            let report = BudgetReportService::new(schedules, ledger).status_report(user_id, today)?;
            print_json(&report)
        }
        Commands::Alerts => {
            let report = BudgetReportService::new(schedules, ledger).status_report(user_id, today)?;
            let drafts: Vec<NotificationDraft> = report
                .statuses
                .iter()
                .flat_map(|status| AlertPlanner::budget_alerts(status, &snapshot.alert_rules))
                .collect();
            print_json(&drafts)
        }
        Commands::Month { month } => {
            let (year, month) = parse_month(&month)?;
            let transactions = ledger.confirmed_in_range(user_id, &month_window(year, month)?)?;
            let summary = monthly_summary(&transactions, year, month, |category_id| {
                categories
                    .get(user_id, category_id)
                    .ok()
                    .map(|category| category.name)
            })?;
            print_json(&summary)
        }
    }
}
