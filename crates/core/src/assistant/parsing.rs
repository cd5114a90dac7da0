//! JSON parsing helpers for model responses.
//!
//! Models wrap their JSON in markdown fences or chatter, and fill fields
//! loosely (amounts as strings with decimal commas, missing dates). These
//! helpers extract the object and apply the documented defaults.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::error::AssistantError;
use super::types::{
    BudgetCheck, CashflowForecast, CategorySuggestion, MonthlyInsights, TransactionProposal,
};
use crate::ledger::MonthlySummary;
use crate::ledger::TransactionType;
use crate::ledger::transaction::truncate_chars;

/// Characters of raw response kept in error messages.
const RAW_PREVIEW_CHARS: usize = 200;

/// Characters of user text used when the model gives no description.
const DESCRIPTION_FALLBACK_CHARS: usize = 50;

/// Category names used when the model suggests an unknown category.
const FALLBACK_CATEGORY_NAMES: [&str; 2] = ["other", "outros"];

const NO_SUMMARY: &str = "No summary available";

fn preview(raw: &str) -> String {
    if raw.chars().count() > RAW_PREVIEW_CHARS {
        format!("{}...", truncate_chars(raw, RAW_PREVIEW_CHARS))
    } else {
        raw.to_string()
    }
}

/// Returns the JSON object embedded in a response.
///
/// Markdown code fences (with or without a `json` tag) and text around the
/// object are dropped.
///
/// # Errors
///
/// Returns `AssistantError::NoJson` when no `{ ... }` span exists.
pub fn extract_json(content: &str) -> Result<&str, AssistantError> {
    let mut body = content.trim();
    if let Some(fenced) = body.strip_prefix("```") {
        body = fenced.split("```").next().unwrap_or(fenced);
        body = body.strip_prefix("json").unwrap_or(body).trim();
    }

    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(AssistantError::NoJson(preview(content.trim()))),
    }
}

fn parse_object(content: &str) -> Result<Map<String, Value>, AssistantError> {
    let json = extract_json(content)?;
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AssistantError::InvalidResponse(format!(
            "expected a JSON object | Raw: {}",
            preview(json)
        ))),
        Err(err) => Err(AssistantError::InvalidResponse(format!(
            "{err} | Raw: {}",
            preview(json)
        ))),
    }
}

fn text_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn string_list(data: &Map<String, Value>, key: &str) -> Vec<String> {
    match data.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(single)) if !single.trim().is_empty() => vec![single.clone()],
        _ => Vec::new(),
    }
}

/// Parses an amount written with either decimal separator.
///
/// `1.234,56` and `1,234.56` both read as 1234.56; a lone comma is a
/// decimal comma (`38,90`).
fn normalize_amount(raw: &str) -> Result<Decimal, AssistantError> {
    let trimmed = raw.trim();
    let text = if trimmed.is_empty() { "0" } else { trimmed };

    let normalized = match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| AssistantError::InvalidResponse(format!("invalid amount: {raw:?}")))
}

fn decimal_field(data: &Map<String, Value>, key: &str) -> Result<Option<Decimal>, AssistantError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => normalize_amount(s).map(Some),
        Some(Value::Number(n)) => normalize_amount(&n.to_string()).map(Some),
        Some(other) => Err(AssistantError::InvalidResponse(format!(
            "invalid {key}: {other}"
        ))),
    }
}

fn confidence(data: &Map<String, Value>) -> Decimal {
    decimal_field(data, "confidence")
        .ok()
        .flatten()
        .unwrap_or(Decimal::new(5, 1))
        .clamp(Decimal::ZERO, Decimal::ONE)
}

/// Parses a transaction proposal.
///
/// Defaults: type `EXPENSE`, date `today`, description the first 50
/// characters of `original_text`, confidence 0.5. An unreadable date falls
/// back to `today`.
///
/// # Errors
///
/// Returns `AssistantError` if no JSON object is found or the amount cannot
/// be read.
pub fn parse_transaction_proposal(
    content: &str,
    today: NaiveDate,
    original_text: &str,
) -> Result<TransactionProposal, AssistantError> {
    let data = parse_object(content)?;

    let transaction_type = match text_field(&data, "type").map(str::to_uppercase).as_deref() {
        Some("INCOME") => TransactionType::Income,
        Some("EXPENSE") | None => TransactionType::Expense,
        Some(other) => {
            debug!(kind = other, "Unknown transaction type from assistant, using EXPENSE");
            TransactionType::Expense
        }
    };

    let amount = decimal_field(&data, "amount")?.unwrap_or(Decimal::ZERO);

    let date = match text_field(&data, "date") {
        None => today,
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| {
            warn!(date = raw, "Unreadable date from assistant, using today");
            today
        }),
    };

    let description = text_field(&data, "description").map_or_else(
        || truncate_chars(original_text.trim(), DESCRIPTION_FALLBACK_CHARS),
        str::to_string,
    );

    Ok(TransactionProposal {
        transaction_type,
        amount,
        date,
        description,
        category_suggestion: text_field(&data, "category_suggestion").map(str::to_string),
        account_suggestion: text_field(&data, "account_suggestion").map(str::to_string),
        confidence: confidence(&data),
    })
}

/// Parses a category suggestion and maps it onto the offered names.
///
/// Matching ignores case. An unknown name maps to the "Other"/"Outros"
/// category when offered, else to `None`.
///
/// # Errors
///
/// Returns `AssistantError` if no JSON object is found.
pub fn parse_category_suggestion<S: AsRef<str>>(
    content: &str,
    categories: &[S],
) -> Result<CategorySuggestion, AssistantError> {
    let data = parse_object(content)?;
    let find = |wanted: &str| {
        categories
            .iter()
            .map(|name| name.as_ref())
            .find(|name| name.trim().to_lowercase() == wanted)
            .map(|name| name.trim().to_string())
    };

    let category = text_field(&data, "category")
        .filter(|s| !s.eq_ignore_ascii_case("null"))
        .and_then(|suggested| {
            find(&suggested.to_lowercase())
                .or_else(|| FALLBACK_CATEGORY_NAMES.iter().find_map(|&name| find(name)))
        });

    Ok(CategorySuggestion {
        category,
        confidence: confidence(&data),
    })
}

/// Parses month commentary, carrying the month's figures through.
///
/// # Errors
///
/// Returns `AssistantError` if no JSON object is found.
pub fn parse_monthly_insights(
    content: &str,
    summary: &MonthlySummary,
) -> Result<MonthlyInsights, AssistantError> {
    let data = parse_object(content)?;

    Ok(MonthlyInsights {
        summary: text_field(&data, "summary").unwrap_or(NO_SUMMARY).to_string(),
        total_income: summary.income,
        total_expenses: summary.expenses,
        balance: summary.balance,
        top_expenses: summary.top_expense_categories.clone(),
        recommendations: string_list(&data, "recommendations"),
    })
}

/// Parses a budget review.
///
/// # Errors
///
/// Returns `AssistantError` if no JSON object is found.
pub fn parse_budget_check(content: &str) -> Result<BudgetCheck, AssistantError> {
    let data = parse_object(content)?;

    Ok(BudgetCheck {
        summary: text_field(&data, "summary").unwrap_or(NO_SUMMARY).to_string(),
        alerts: string_list(&data, "alerts"),
        recommendations: string_list(&data, "recommendations"),
    })
}

/// Parses a cash flow forecast. Missing figures read as zero.
///
/// # Errors
///
/// Returns `AssistantError` if no JSON object is found or a figure is not a
/// number.
pub fn parse_cashflow_forecast(content: &str) -> Result<CashflowForecast, AssistantError> {
    let data = parse_object(content)?;

    Ok(CashflowForecast {
        summary: text_field(&data, "summary").unwrap_or(NO_SUMMARY).to_string(),
        forecast_income: decimal_field(&data, "forecast_income")?.unwrap_or_default(),
        forecast_expenses: decimal_field(&data, "forecast_expenses")?.unwrap_or_default(),
        forecast_balance: decimal_field(&data, "forecast_balance")?.unwrap_or_default(),
        recommendations: string_list(&data, "recommendations"),
    })
}
