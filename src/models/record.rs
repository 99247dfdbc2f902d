//! Expense record model
//!
//! A record is one logged expense: a calendar date, a free-text label, a
//! non-negative amount, and a category name. Records are append-only; there
//! is no in-place edit, correction happens via undo followed by re-add.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder label used when the user leaves the label blank
pub const DEFAULT_LABEL: &str = "No Label";

/// Sentinel category used when a row carries no category
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Earliest accepted record date; rows dated before this are rejected
pub const EPOCH_FLOOR: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch floor"),
};

/// A single logged expense
///
/// Field names serialize to the persisted document's wire keys
/// (`Date`, `Expense Label`, `Expense Amount`, `Category`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense (no time component)
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Free-text description
    #[serde(rename = "Expense Label")]
    pub label: String,

    /// Non-negative monetary amount
    #[serde(rename = "Expense Amount")]
    pub amount: f64,

    /// Category name; `DEFAULT_CATEGORY` when none was given
    #[serde(rename = "Category", default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl ExpenseRecord {
    /// Create a record, applying the label and category defaults
    pub fn new(date: NaiveDate, label: &str, amount: f64, category: &str) -> Self {
        let label = label.trim();
        let category = category.trim();
        Self {
            date,
            label: if label.is_empty() {
                DEFAULT_LABEL.to_string()
            } else {
                label.to_string()
            },
            amount,
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
        }
    }
}
