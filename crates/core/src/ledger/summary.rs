//! Monthly income/expense summaries.

use std::collections::HashMap;

use chrono::NaiveDate;
use finagenda_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::transaction::Transaction;
use super::types::TransactionType;
use crate::period::{PeriodWindow, shift_months};

/// Number of expense categories listed in a summary.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category, `None` for uncategorized spending.
    pub category_id: Option<CategoryId>,
    /// Display label.
    pub label: String,
    /// Summed amount.
    pub total: Decimal,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month in `YYYY-MM` form.
    pub month: String,
    /// Confirmed income.
    pub income: Decimal,
    /// Confirmed expenses.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
    /// Largest expense categories, biggest first.
    pub top_expense_categories: Vec<CategoryTotal>,
    /// Number of confirmed transactions in the month.
    pub transaction_count: usize,
}

/// Parses a `YYYY-MM` month.
///
/// # Errors
///
/// Returns `LedgerError::InvalidMonth` for malformed input.
pub fn parse_month(value: &str) -> Result<(i32, u32), LedgerError> {
    let invalid = || LedgerError::InvalidMonth(value.to_string());

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    month_window(year, month).map_err(|_| invalid())?;

    Ok((year, month))
}

/// Window covering a whole calendar month.
///
/// # Errors
///
/// Returns `LedgerError::InvalidMonth` when the month does not exist.
pub fn month_window(year: i32, month: u32) -> Result<PeriodWindow, LedgerError> {
    let invalid = || LedgerError::InvalidMonth(format!("{year:04}-{month:02}"));

    let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end_date = shift_months(start_date, 1)
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;

    Ok(PeriodWindow {
        start_date,
        end_date,
    })
}

/// Summarizes confirmed transactions dated in the given month.
///
/// Entries outside the month or unconfirmed are ignored, so callers may pass
/// a wider slice. `label_for` resolves category names for the top list.
///
/// # Errors
///
/// Returns `LedgerError::InvalidMonth` when the month does not exist.
pub fn monthly_summary<L>(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    label_for: L,
) -> Result<MonthlySummary, LedgerError>
where
    L: Fn(CategoryId) -> Option<String>,
{
    let window = month_window(year, month)?;

    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut count = 0usize;
    let mut by_category: HashMap<Option<CategoryId>, Decimal> = HashMap::new();

    for tx in transactions
        .iter()
        .filter(|tx| tx.is_confirmed && window.contains(tx.date))
    {
        count += 1;
        match tx.transaction_type {
            TransactionType::Income => income += tx.amount,
            TransactionType::Expense => {
                expenses += tx.amount;
                *by_category.entry(tx.category_id).or_default() += tx.amount;
            }
        }
    }

    let mut top: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category_id, total)| CategoryTotal {
            category_id,
            label: category_id
                .and_then(&label_for)
                .unwrap_or_else(|| "Uncategorized".to_string()),
            total,
        })
        .collect();
    top.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.label.cmp(&b.label))
    });
    top.truncate(TOP_CATEGORY_COUNT);

    Ok(MonthlySummary {
        month: format!("{year:04}-{month:02}"),
        income,
        expenses,
        balance: income - expenses,
        top_expense_categories: top,
        transaction_count: count,
    })
}
