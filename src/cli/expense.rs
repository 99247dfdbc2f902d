//! Expense CLI commands
//!
//! Add, list, and reset operate on a one-shot session: load, mutate once,
//! save loudly, print the result.

use crate::config::Settings;
use crate::display;
use crate::error::AllowanceResult;
use crate::models::DEFAULT_CATEGORY;
use crate::storage::Storage;

use super::{load_session, parse_date_arg, save_session};

/// Add one expense record
pub fn handle_add(
    storage: &Storage,
    settings: Settings,
    date: Option<&str>,
    label: &str,
    amount: f64,
    category: Option<&str>,
) -> AllowanceResult<()> {
    let date = parse_date_arg(date)?;
    let mut session = load_session(storage, settings);

    let record = session.add_expense(
        date,
        label,
        amount,
        category.unwrap_or(DEFAULT_CATEGORY),
    )?;
    save_session(storage, &session)?;

    println!(
        "Added: {} - {} ({})",
        record.label,
        display::format_money(record.amount, &session.settings.currency_symbol),
        record.category
    );
    Ok(())
}

/// Print the raw expense log
pub fn handle_list(storage: &Storage, settings: Settings) -> AllowanceResult<()> {
    let session = load_session(storage, settings);
    println!(
        "{}",
        display::render_records(&session.records, &session.settings)
    );
    Ok(())
}

/// Clear all records (requires confirmation flag)
pub fn handle_reset(storage: &Storage, settings: Settings, confirmed: bool) -> AllowanceResult<()> {
    if !confirmed {
        println!("Refusing to clear all records without --yes.");
        return Ok(());
    }
    let mut session = load_session(storage, settings);
    let removed = session.records.len();
    session.reset();
    save_session(storage, &session)?;
    println!("Removed {} record(s).", removed);
    Ok(())
}
