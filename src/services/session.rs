//! Session state and command handlers
//!
//! One explicit state struct owns the records, categories, and undo history
//! for the interactive session; every user action is a command method that
//! validates, snapshots, and then mutates. No ambient globals.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{CategorySet, ExpenseRecord, RawRow, EPOCH_FLOOR};
use crate::services::history::UndoHistory;
use crate::services::sanitize::{sanitize_rows, SanitizeOutcome};
use crate::storage::LedgerDocument;

/// The full mutable state of one tracking session
pub struct Session {
    pub records: Vec<ExpenseRecord>,
    pub categories: CategorySet,
    pub settings: Settings,
    history: UndoHistory,
}

impl Session {
    /// Build a session from a loaded document and settings
    pub fn new(document: LedgerDocument, settings: Settings) -> Self {
        Self {
            records: document.records,
            categories: document.categories,
            settings,
            history: UndoHistory::new(),
        }
    }

    /// The document to persist for the current state
    pub fn document(&self) -> LedgerDocument {
        LedgerDocument {
            records: self.records.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Add one manually entered expense
    ///
    /// Manual entry is validated before any mutation: the amount must be
    /// positive, the label non-blank, and the date within the accepted
    /// window. On success the record is appended and returned.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        label: &str,
        amount: f64,
        category: &str,
    ) -> AllowanceResult<ExpenseRecord> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(AllowanceError::Validation(
                "Expense amount must be greater than zero".into(),
            ));
        }
        if label.trim().is_empty() {
            return Err(AllowanceError::Validation(
                "Expense label cannot be empty".into(),
            ));
        }
        let today = Local::now().date_naive();
        if date < EPOCH_FLOOR || date > today {
            return Err(AllowanceError::Validation(format!(
                "Date must fall between {} and today",
                EPOCH_FLOOR
            )));
        }

        self.history.record_mutation(&self.records);
        let record = ExpenseRecord::new(date, label, amount, category);
        self.categories.add(&record.category);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Bulk-import raw rows through the sanitizer
    ///
    /// The whole batch is sanitized with today's date as the upper bound;
    /// survivors are appended in order. Returns the sanitize outcome so the
    /// caller can surface drop/coerce notices.
    pub fn import_rows(&mut self, rows: &[RawRow]) -> SanitizeOutcome {
        let today = Local::now().date_naive();
        let outcome = sanitize_rows(rows, today);
        if !outcome.records.is_empty() {
            self.history.record_mutation(&self.records);
            for record in &outcome.records {
                self.categories.add(&record.category);
            }
            self.records.extend(outcome.records.iter().cloned());
        }
        outcome
    }

    /// Undo the last mutation; returns true when state changed
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.records) {
            Some(snapshot) => {
                self.records = snapshot;
                true
            }
            None => false,
        }
    }

    /// Redo the last undone mutation; returns true when state changed
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.records) {
            Some(snapshot) => {
                self.records = snapshot;
                true
            }
            None => false,
        }
    }

    /// Clear all records (categories and settings are kept)
    pub fn reset(&mut self) {
        self.history.record_mutation(&self.records);
        self.records.clear();
    }

    /// Append a category; no-op when blank or already present
    ///
    /// Categories are not part of the undoable record sequence, so no
    /// history snapshot is taken.
    pub fn add_category(&mut self, name: &str) -> bool {
        self.categories.add(name)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawField;

    fn session() -> Session {
        Session::new(LedgerDocument::default(), Settings::default())
    }

    fn a_date() -> NaiveDate {
        // Safely in the past, on a weekday
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_add_expense_appends_and_snapshots() {
        let mut s = session();
        let record = s.add_expense(a_date(), "Lunch", 120.0, "Food").unwrap();
        assert_eq!(s.records.len(), 1);
        assert_eq!(record.label, "Lunch");
        assert!(s.can_undo());
    }

    #[test]
    fn test_add_expense_rejects_zero_amount() {
        let mut s = session();
        let err = s.add_expense(a_date(), "Lunch", 0.0, "Food").unwrap_err();
        assert!(err.is_validation());
        // Rejected before mutation: nothing appended, nothing to undo
        assert!(s.records.is_empty());
        assert!(!s.can_undo());
    }

    #[test]
    fn test_add_expense_rejects_blank_label() {
        let mut s = session();
        assert!(s.add_expense(a_date(), "  ", 10.0, "Food").is_err());
    }

    #[test]
    fn test_add_expense_rejects_pre_epoch_date() {
        let mut s = session();
        let old = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert!(s.add_expense(old, "Lunch", 10.0, "Food").is_err());
    }

    #[test]
    fn test_add_expense_learns_new_category() {
        let mut s = session();
        s.add_expense(a_date(), "Vet", 500.0, "Pets").unwrap();
        assert!(s.categories.contains("Pets"));
    }

    #[test]
    fn test_undo_redo_round_trip_with_invalidation() {
        let mut s = session();
        s.add_expense(a_date(), "Lunch", 120.0, "Food").unwrap();
        let r1 = s.records.clone();

        assert!(s.undo());
        assert!(s.records.is_empty());

        assert!(s.redo());
        assert_eq!(s.records, r1);

        // Undo, then a fresh add: redo must become a no-op
        assert!(s.undo());
        s.add_expense(a_date(), "Snack", 30.0, "Food").unwrap();
        assert!(!s.redo());
        assert_eq!(s.records.len(), 1);
        assert_eq!(s.records[0].label, "Snack");
    }

    #[test]
    fn test_import_rows_appends_survivors() {
        let mut s = session();
        let rows = vec![
            RawRow::new(
                RawField::from("2024-06-03"),
                RawField::from("Lunch"),
                RawField::from("120"),
                RawField::from("Food"),
            ),
            RawRow::new(
                RawField::from("garbage"),
                RawField::from("dropped"),
                RawField::from("10"),
                RawField::Absent,
            ),
        ];
        let outcome = s.import_rows(&rows);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.dropped_dates, 1);
        assert_eq!(s.records.len(), 1);
        assert!(s.can_undo());
    }

    #[test]
    fn test_import_of_all_bad_rows_takes_no_snapshot() {
        let mut s = session();
        let rows = vec![RawRow::new(
            RawField::from("garbage"),
            RawField::Absent,
            RawField::Absent,
            RawField::Absent,
        )];
        let outcome = s.import_rows(&rows);
        assert!(outcome.records.is_empty());
        assert!(!s.can_undo());
    }

    #[test]
    fn test_reset_clears_and_is_undoable() {
        let mut s = session();
        s.add_expense(a_date(), "Lunch", 120.0, "Food").unwrap();
        s.reset();
        assert!(s.records.is_empty());
        assert!(s.undo());
        assert_eq!(s.records.len(), 1);
    }

    #[test]
    fn test_add_category_rules() {
        let mut s = session();
        assert!(s.add_category("Books"));
        assert!(!s.add_category("Books"));
        assert!(!s.add_category("   "));
    }

    #[test]
    fn test_document_round_trip() {
        let mut s = session();
        s.add_expense(a_date(), "Lunch", 120.0, "Food").unwrap();
        let doc = s.document();
        assert_eq!(doc.records, s.records);
        assert_eq!(doc.categories, s.categories);
    }
}
