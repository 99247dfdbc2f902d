//! Reporting CLI commands
//!
//! Summary, daily series, and forecast views. These are read-only: the
//! session is loaded, aggregated, rendered, and discarded.

use crate::config::Settings;
use crate::display;
use crate::error::AllowanceResult;
use crate::services::{aggregate, forecast};
use crate::storage::Storage;

use super::load_session;

/// Print the headline summary and category breakdown
pub fn handle_summary(storage: &Storage, settings: Settings) -> AllowanceResult<()> {
    let session = load_session(storage, settings);
    let daily_allowance = session.settings.daily_allowance();

    let summary = aggregate::summary(&session.records, daily_allowance);
    println!("{}", display::render_summary(&summary, &session.settings));

    let totals = aggregate::category_totals(&session.records);
    if !totals.is_empty() {
        println!("{}", display::render_category_table(&totals, &session.settings));
    }
    Ok(())
}

/// Print the business-day daily series
pub fn handle_daily(storage: &Storage, settings: Settings) -> AllowanceResult<()> {
    let session = load_session(storage, settings);
    let daily_allowance = session.settings.daily_allowance();

    let series = aggregate::daily_series(&session.records, daily_allowance);
    let (window, notice) =
        aggregate::windowed_series(&series, session.settings.display_window_days);
    println!(
        "{}",
        display::render_daily_table(window, notice.as_deref(), &session.settings)
    );
    Ok(())
}

/// Print the savings forecast for the next N business days
pub fn handle_forecast(
    storage: &Storage,
    settings: Settings,
    days: Option<usize>,
) -> AllowanceResult<()> {
    let session = load_session(storage, settings);
    let daily_allowance = session.settings.daily_allowance();
    let horizon = days.unwrap_or(session.settings.forecast_horizon);

    let series = aggregate::daily_series(&session.records, daily_allowance);
    let result = match series.last() {
        Some(last) => {
            let savings: Vec<f64> = series.iter().map(|d| d.daily_savings).collect();
            forecast::forecast(&savings, last.date, horizon)
        }
        None => forecast::Forecast::InsufficientData {
            observed: 0,
            required: forecast::MIN_FLAT_DAYS,
        },
    };
    println!("{}", display::render_forecast(&result, &session.settings));
    Ok(())
}
