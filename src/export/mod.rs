//! Tabular import/export
//!
//! CSV is the only tabular interchange format: uploads are parsed into raw
//! rows for the sanitizer, and the full record sequence can be written back
//! out in the same four-column shape.

pub mod csv;

pub use csv::{read_rows_csv, write_records_csv};
