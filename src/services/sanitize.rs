//! Record sanitization
//!
//! Turns raw input rows (manual entry or uploaded tables) into canonical
//! expense records. Per-row rules handle missing and unparseable fields;
//! a batch-level 3-sigma filter trims outlier amounts once the whole batch
//! has survived the per-row steps.

use chrono::NaiveDate;

use crate::models::{
    ExpenseRecord, FieldOutcome, RawField, RawRow, DEFAULT_CATEGORY, DEFAULT_LABEL, EPOCH_FLOOR,
};

/// Minimum batch size before the outlier filter applies
const OUTLIER_MIN_BATCH: usize = 6;

/// Outlier threshold in population standard deviations
const OUTLIER_SIGMA: f64 = 3.0;

/// Date formats accepted for raw rows, tried in order
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y", "%d-%m-%Y",
];

/// What happened to a sanitized batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizeOutcome {
    /// Surviving records, in input order
    pub records: Vec<ExpenseRecord>,
    /// Rows dropped for a missing/unparseable/out-of-range date
    pub dropped_dates: usize,
    /// Rows whose amount was coerced to zero
    pub coerced_amounts: usize,
    /// Rows dropped by the batch outlier filter
    pub dropped_outliers: usize,
}

impl SanitizeOutcome {
    /// Total rows removed from the batch
    pub fn dropped(&self) -> usize {
        self.dropped_dates + self.dropped_outliers
    }
}

/// Sanitize a batch of raw rows into canonical records
///
/// Rows with no parseable date, or a date outside `[EPOCH_FLOOR, today]`,
/// are dropped. Missing or unparseable amounts coerce to zero. When more
/// than five rows survive and the batch's amounts have nonzero spread,
/// amounts further than three population standard deviations from the
/// batch mean are dropped. Output order is input order.
pub fn sanitize_rows(rows: &[RawRow], today: NaiveDate) -> SanitizeOutcome {
    let mut outcome = SanitizeOutcome::default();
    let mut survivors = Vec::with_capacity(rows.len());

    for row in rows {
        let date = match parse_date_field(&row.date) {
            FieldOutcome::Valid(date) if date >= EPOCH_FLOOR && date <= today => date,
            _ => {
                outcome.dropped_dates += 1;
                continue;
            }
        };

        let amount = match parse_amount_field(&row.amount) {
            FieldOutcome::Valid(amount) => amount,
            FieldOutcome::Invalid | FieldOutcome::Absent => {
                outcome.coerced_amounts += 1;
                0.0
            }
        };

        let label = row.label.as_str().unwrap_or(DEFAULT_LABEL);
        let category = row.category.as_str().unwrap_or(DEFAULT_CATEGORY);
        survivors.push(ExpenseRecord::new(date, label, amount, category));
    }

    let (records, dropped_outliers) = trim_outliers(survivors);
    outcome.records = records;
    outcome.dropped_outliers = dropped_outliers;
    outcome
}

/// Parse a raw date field against the accepted formats
pub fn parse_date_field(field: &RawField) -> FieldOutcome<NaiveDate> {
    let Some(text) = field.as_str() else {
        return FieldOutcome::Absent;
    };
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return FieldOutcome::Valid(date);
        }
    }
    FieldOutcome::Invalid
}

/// Parse a raw amount field into a non-negative quantity
///
/// Strips currency symbols, commas, and spaces before parsing. Negative
/// values are invalid input for an expense amount and coerce like any other
/// unparseable value.
pub fn parse_amount_field(field: &RawField) -> FieldOutcome<f64> {
    let Some(text) = field.as_str() else {
        return FieldOutcome::Absent;
    };
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => FieldOutcome::Valid(amount),
        _ => FieldOutcome::Invalid,
    }
}

/// Drop records whose amount deviates from the batch mean by more than
/// three population standard deviations
///
/// Only applies to batches larger than five records with nonzero spread.
/// The filter is stable: surviving records keep their input order.
fn trim_outliers(records: Vec<ExpenseRecord>) -> (Vec<ExpenseRecord>, usize) {
    if records.len() < OUTLIER_MIN_BATCH {
        return (records, 0);
    }

    let n = records.len() as f64;
    let mean = records.iter().map(|r| r.amount).sum::<f64>() / n;
    let variance = records
        .iter()
        .map(|r| (r.amount - mean).powi(2))
        .sum::<f64>()
        / n;
    let stdev = variance.sqrt();
    if stdev <= 0.0 {
        return (records, 0);
    }

    let before = records.len();
    let kept: Vec<ExpenseRecord> = records
        .into_iter()
        .filter(|r| (r.amount - mean).abs() <= OUTLIER_SIGMA * stdev)
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
