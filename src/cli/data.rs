//! Import/export CLI commands
//!
//! CSV in, CSV out. Import runs the whole file through the sanitizer and
//! reports what was dropped or coerced; a malformed file aborts with a
//! single error and no partial load.

use std::fs::File;
use std::path::Path;

use crate::config::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::export::{read_rows_csv, write_records_csv};
use crate::storage::Storage;

use super::{load_session, save_session};

/// Import expenses from a CSV file
pub fn handle_import(storage: &Storage, settings: Settings, path: &Path) -> AllowanceResult<()> {
    let file = File::open(path).map_err(|e| {
        AllowanceError::Import(format!("Could not open {}: {}", path.display(), e))
    })?;
    let rows = read_rows_csv(file)?;

    let mut session = load_session(storage, settings);
    let outcome = session.import_rows(&rows);
    save_session(storage, &session)?;

    println!("Imported {} record(s).", outcome.records.len());
    if outcome.dropped_dates > 0 {
        println!(
            "Dropped {} row(s) with missing/invalid/out-of-range dates.",
            outcome.dropped_dates
        );
    }
    if outcome.coerced_amounts > 0 {
        println!(
            "Coerced {} unreadable amount(s) to zero.",
            outcome.coerced_amounts
        );
    }
    if outcome.dropped_outliers > 0 {
        println!(
            "Dropped {} outlier amount(s) (over 3 standard deviations from the batch mean).",
            outcome.dropped_outliers
        );
    }
    Ok(())
}

/// Export all records to a CSV file
pub fn handle_export(storage: &Storage, settings: Settings, path: &Path) -> AllowanceResult<()> {
    let session = load_session(storage, settings);
    let file = File::create(path).map_err(|e| {
        AllowanceError::Export(format!("Could not create {}: {}", path.display(), e))
    })?;
    write_records_csv(&session.records, file)?;
    println!(
        "Exported {} record(s) to {}.",
        session.records.len(),
        path.display()
    );
    Ok(())
}
