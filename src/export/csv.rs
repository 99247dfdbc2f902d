//! CSV import and export
//!
//! Expected columns are `Date, Expense Label, Expense Amount, Category`,
//! with tolerant header aliasing on import (`Amount` for `Expense Amount`,
//! `Description` for `Expense Label`, case- and space-insensitive). Parsed
//! rows stay raw; validation and coercion belong to the sanitizer.

use std::io::{Read, Write};

use csv::StringRecord;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{ExpenseRecord, RawField, RawRow};

/// Column indices resolved from a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ColumnMapping {
    date: Option<usize>,
    label: Option<usize>,
    amount: Option<usize>,
    category: Option<usize>,
}

/// Resolve header names to columns, tolerating common aliases
///
/// Matching ignores case and whitespace. Unknown columns are ignored; the
/// first match wins for each field.
fn detect_mapping(headers: &StringRecord) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = header
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "date" if mapping.date.is_none() => mapping.date = Some(idx),
            "expenselabel" | "description" | "label" if mapping.label.is_none() => {
                mapping.label = Some(idx)
            }
            "expenseamount" | "amount" if mapping.amount.is_none() => mapping.amount = Some(idx),
            "category" if mapping.category.is_none() => mapping.category = Some(idx),
            _ => {}
        }
    }

    mapping
}

/// Read raw rows from CSV bytes
///
/// A file-level parse failure (or a header row with no recognizable date
/// column) aborts the whole import with a single human-readable error; no
/// partial batch is returned. Row contents are not validated here.
pub fn read_rows_csv<R: Read>(reader: R) -> AllowanceResult<Vec<RawRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AllowanceError::Import(format!("Could not read CSV header: {}", e)))?
        .clone();
    let mapping = detect_mapping(&headers);
    if mapping.date.is_none() {
        return Err(AllowanceError::Import(
            "CSV has no recognizable Date column".into(),
        ));
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record =
            result.map_err(|e| AllowanceError::Import(format!("Malformed CSV row: {}", e)))?;
        rows.push(RawRow {
            date: field(&record, mapping.date),
            label: field(&record, mapping.label),
            amount: field(&record, mapping.amount),
            category: field(&record, mapping.category),
        });
    }
    Ok(rows)
}

fn field(record: &StringRecord, column: Option<usize>) -> RawField {
    RawField::from_cell(column.and_then(|idx| record.get(idx)))
}

/// Write the full record sequence in the four-column shape
///
/// Dates are normalized to `YYYY-MM-DD`, amounts to two decimals.
pub fn write_records_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> AllowanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Expense Label", "Expense Amount", "Category"])
        .map_err(|e| AllowanceError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.label.clone(),
                format!("{:.2}", record.amount),
                record.category.clone(),
            ])
            .map_err(|e| AllowanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AllowanceError::Export(e.to_string()))?;
    Ok(())
}
