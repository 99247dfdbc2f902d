//! The persisted ledger document
//!
//! A single JSON object holding the full record sequence and the category
//! set. Saves are whole-document overwrites; there is no incremental write.

use serde::{Deserialize, Serialize};

use crate::models::{CategorySet, ExpenseRecord};

/// The on-disk document shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub records: Vec<ExpenseRecord>,

    #[serde(default)]
    pub categories: CategorySet,
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            categories: CategorySet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_has_seed_categories() {
        let doc = LedgerDocument::default();
        assert!(doc.records.is_empty());
        assert!(doc.categories.contains("Food"));
    }

    #[test]
    fn test_wire_shape() {
        let mut doc = LedgerDocument::default();
        doc.records.push(ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            "Lunch",
            120.0,
            "Food",
        ));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["records"][0]["Date"], "2025-03-10");
        assert_eq!(json["records"][0]["Expense Label"], "Lunch");
        assert_eq!(json["records"][0]["Expense Amount"], 120.0);
        assert_eq!(json["records"][0]["Category"], "Food");
        assert!(json["categories"].is_array());
    }

    #[test]
    fn test_partial_document_deserializes() {
        // Older files may carry only records
        let doc: LedgerDocument = serde_json::from_str(r#"{"records": []}"#).unwrap();
        assert!(doc.categories.contains("Uncategorized"));
    }
}
