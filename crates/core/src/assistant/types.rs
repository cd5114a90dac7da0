//! Typed assistant results.

use chrono::NaiveDate;
use finagenda_shared::types::{CategoryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{CategoryTotal, LedgerError, NewTransaction, Transaction, TransactionType};

/// Transaction extracted from free text, awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionProposal {
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Amount.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
    /// Short description.
    pub description: String,
    /// Category name proposed by the model.
    pub category_suggestion: Option<String>,
    /// Payment method mentioned in the text.
    pub account_suggestion: Option<String>,
    /// Model confidence in `[0, 1]`.
    pub confidence: Decimal,
}

impl TransactionProposal {
    /// Turns the proposal into an unconfirmed, assistant-categorized transaction.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NonPositiveAmount` if the amount is not positive.
    pub fn into_unconfirmed(
        self,
        user_id: UserId,
        category_id: Option<CategoryId>,
    ) -> Result<Transaction, LedgerError> {
        let mut transaction = Transaction::record(NewTransaction {
            user_id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category_id,
            is_confirmed: false,
            notes: String::new(),
            source_event: None,
        })?;
        transaction.ai_categorized = true;
        transaction.ai_confidence = Some(self.confidence);
        Ok(transaction)
    }
}

/// Category chosen for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// One of the offered names, or `None`.
    pub category: Option<String>,
    /// Model confidence in `[0, 1]`.
    pub confidence: Decimal,
}

/// Commentary on one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInsights {
    /// One or two sentences on the month.
    pub summary: String,
    /// Income of the month.
    pub total_income: Decimal,
    /// Expenses of the month.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
    /// Largest expense categories.
    pub top_expenses: Vec<CategoryTotal>,
    /// Practical tips.
    pub recommendations: Vec<String>,
}

/// Commentary on the current budget statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCheck {
    /// Short overview.
    pub summary: String,
    /// Budgets close to or over their limit.
    pub alerts: Vec<String>,
    /// Practical tips.
    pub recommendations: Vec<String>,
}

/// Projection of next month's cash flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowForecast {
    /// Expected scenario.
    pub summary: String,
    /// Projected income.
    pub forecast_income: Decimal,
    /// Projected expenses.
    pub forecast_expenses: Decimal,
    /// Projected balance.
    pub forecast_balance: Decimal,
    /// Practical tips.
    pub recommendations: Vec<String>,
}
