//! Prompt templates.

use chrono::NaiveDate;
use finagenda_shared::config::AssistantConfig;

use super::chat::{ChatMessage, ChatRole};
use crate::budget::BudgetStatus;
use crate::ledger::MonthlySummary;
use crate::ledger::transaction::truncate_chars;
use crate::ledger::types::format_amount;

/// System and user messages for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Instructions for the model.
    pub system: String,
    /// The request itself.
    pub user: String,
}

/// Trims names, drops blanks and case-insensitive duplicates, keeps at most `limit`.
#[must_use]
pub fn normalize_categories<S: AsRef<str>>(names: &[S], limit: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty() && seen.insert(name.to_lowercase()))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Bullet list of category names.
#[must_use]
pub fn format_categories(names: &[String]) -> String {
    if names.is_empty() {
        return "- No categories registered".to_string();
    }
    names
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trims user text and cuts it to `max_chars` characters.
#[must_use]
pub fn truncate_input(text: &str, max_chars: usize) -> String {
    truncate_chars(text.trim(), max_chars)
}

/// Builds prompts within configured input limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    max_input_chars: usize,
    category_limit: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl PromptBuilder {
    /// Creates a builder with explicit limits.
    #[must_use]
    pub const fn new(max_input_chars: usize, category_limit: usize) -> Self {
        Self {
            max_input_chars,
            category_limit,
        }
    }

    /// Creates a builder from the assistant settings.
    #[must_use]
    pub const fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.max_input_chars, config.category_limit)
    }

    /// Prompt asking the model to extract a transaction from free text.
    #[must_use]
    pub fn transaction<S: AsRef<str>>(
        &self,
        text: &str,
        today: NaiveDate,
        expense_categories: &[S],
        income_categories: &[S],
    ) -> Prompt {
        let expense = normalize_categories(expense_categories, self.category_limit);
        let income = normalize_categories(income_categories, self.category_limit);

        let user = format!(
            "Extract financial information from the text.\n\
             \n\
             Fields:\n\
             - type: \"INCOME\" or \"EXPENSE\"\n\
             - amount: numeric value, digits only\n\
             - date: YYYY-MM-DD (if not mentioned, use today: {today})\n\
             - description: short description of what was bought or received\n\
             - category_suggestion: one of the categories below\n\
             - account_suggestion: payment method if mentioned (PIX, Cash, Card, Bank)\n\
             - confidence: your confidence from 0.0 to 1.0\n\
             \n\
             Expense categories:\n{expense}\n\
             \n\
             Income categories:\n{income}\n\
             \n\
             If no category fits, use \"Other\".\n\
             Reply ONLY with valid JSON, no markdown.\n\
             \n\
             Example:\n\
             {{\"type\":\"EXPENSE\",\"amount\":38.90,\"date\":\"{today}\",\"description\":\"Guitar strings\",\"category_suggestion\":\"Instruments\",\"account_suggestion\":\"PIX\",\"confidence\":0.85}}\n\
             \n\
             User text: {text}",
            expense = format_categories(&expense),
            income = format_categories(&income),
            text = truncate_input(text, self.max_input_chars),
        );

        Prompt {
            system: "You extract financial data from text and reply only in JSON.".to_string(),
            user,
        }
    }

    /// Prompt asking the model to pick one category for a text.
    #[must_use]
    pub fn categorize<S: AsRef<str>>(&self, text: &str, categories: &[S]) -> Prompt {
        let names = normalize_categories(categories, self.category_limit);
        let user = format!(
            "Choose the MOST suitable category among the options below.\n\
             \n\
             Available categories:\n{names}\n\
             \n\
             Reply ONLY with valid JSON, no markdown.\n\
             Format:\n\
             {{\"category\":\"Category name or null\",\"confidence\":0.0}}\n\
             \n\
             User text: {text}",
            names = format_categories(&names),
            text = truncate_input(text, self.max_input_chars),
        );

        Prompt {
            system: "You classify transactions and reply only in JSON.".to_string(),
            user,
        }
    }

    /// Prompt asking for commentary on one month.
    #[must_use]
    pub fn monthly_insights(&self, summary: &MonthlySummary) -> Prompt {
        let top = if summary.top_expense_categories.is_empty() {
            "- No categories recorded".to_string()
        } else {
            summary
                .top_expense_categories
                .iter()
                .map(|c| format!("- {}: {}", c.label, format_amount(c.total)))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let user = format!(
            "You are a personal finance advisor reviewing {month}.\n\
             \n\
             Month data:\n\
             - Income: {income}\n\
             - Expenses: {expenses}\n\
             - Balance: {balance}\n\
             \n\
             Top spending categories:\n{top}\n\
             \n\
             Return JSON with:\n\
             - summary: 1-2 sentences on the month's financial health\n\
             - recommendations: 2-4 practical tips\n\
             \n\
             Be direct and focus on concrete actions.\n\
             Reply ONLY with valid JSON, no markdown.",
            month = summary.month,
            income = format_amount(summary.income),
            expenses = format_amount(summary.expenses),
            balance = format_amount(summary.balance),
        );

        Prompt {
            system: "You are a financial advisor who replies only in JSON.".to_string(),
            user,
        }
    }

    /// Prompt asking for a review of budget statuses.
    #[must_use]
    pub fn budget_check(&self, statuses: &[BudgetStatus]) -> Prompt {
        let lines = statuses
            .iter()
            .map(|s| {
                format!(
                    "- {}: limit {}, spent {}, used {}%, alert at {}%",
                    s.category_label,
                    format_amount(s.limit_amount),
                    format_amount(s.spent_amount),
                    s.percentage_used.round_dp(1),
                    s.alert_threshold_percent
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let user = format!(
            "Review the budgets below and return:\n\
             - summary: short overview\n\
             - alerts: list of objective alerts for budgets near or over their limit\n\
             - recommendations: 2-4 practical tips\n\
             \n\
             Budgets:\n{lines}\n\
             \n\
             Reply ONLY with valid JSON."
        );

        Prompt {
            system: "You reply only in JSON about budgets.".to_string(),
            user,
        }
    }

    /// Prompt asking for next month's cash flow projection.
    #[must_use]
    pub fn cashflow_forecast(&self, history: &[MonthlySummary]) -> Prompt {
        let lines = history
            .iter()
            .map(|m| {
                format!(
                    "- {}: income {}, expenses {}, balance {}",
                    m.month,
                    format_amount(m.income),
                    format_amount(m.expenses),
                    format_amount(m.balance)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let user = format!(
            "Based on the history below, estimate next month.\n\
             Return JSON with:\n\
             - summary: short description of the expected scenario\n\
             - forecast_income: projected income\n\
             - forecast_expenses: projected expenses\n\
             - forecast_balance: projected balance\n\
             - recommendations: 2-4 practical tips\n\
             \n\
             History:\n{lines}\n\
             \n\
             Reply ONLY with valid JSON."
        );

        Prompt {
            system: "You reply only in JSON with financial forecasts.".to_string(),
            user,
        }
    }
    /// Messages for one conversational turn.
    ///
    /// The system message carries `context`. System entries in `history` are
    /// dropped so the context is the only one, and `message` is truncated
    /// like any other user text.
    #[must_use]
    pub fn chat(
        &self,
        context: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Vec<ChatMessage> {
        let system = format!(
            "You are a personal finance assistant. Use the context below to answer \
             clearly, focusing on practical actions. If information is missing, ask \
             objective questions.\n\n{context}"
        );

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(system));
        messages.extend(history.iter().filter(|m| m.role != ChatRole::System).cloned());
        messages.push(ChatMessage::user(truncate_input(message, self.max_input_chars)));
        messages
    }
}
