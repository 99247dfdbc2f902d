//! Table views for records, aggregates, and forecasts
//!
//! All views render to plain strings. Degenerate inputs (no records, not
//! enough history) render explicit messages instead of empty tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::ExpenseRecord;
use crate::services::aggregate::{CategoryTotal, DailyAggregate, Summary};
use crate::services::forecast::Forecast;

use super::report::{format_bar, format_money, format_percentage, separator};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Render the raw expense log
pub fn render_records(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expense records yet. Add some expenses to see the log.".to_string();
    }
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            date: r.date.format(&settings.date_format).to_string(),
            label: r.label.clone(),
            amount: format_money(r.amount, &settings.currency_symbol),
            category: r.category.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Allowance")]
    allowance: String,
    #[tabled(rename = "Savings")]
    savings: String,
}

/// Render the business-day daily series, with an optional window notice
pub fn render_daily_table(
    series: &[DailyAggregate],
    notice: Option<&str>,
    settings: &Settings,
) -> String {
    if series.is_empty() {
        return "No expense records yet. Add some expenses to see the daily summary.".to_string();
    }
    let rows: Vec<DailyRow> = series
        .iter()
        .map(|d| DailyRow {
            date: d.date.format(&settings.date_format).to_string(),
            spent: format_money(d.total_spent, &settings.currency_symbol),
            entries: d.expense_count,
            allowance: format_money(d.daily_allowance, &settings.currency_symbol),
            savings: format_money(d.daily_savings, &settings.currency_symbol),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    match notice {
        Some(notice) => format!("{}\n{}", notice, table),
        None => table,
    }
}

/// Render category totals with a proportional bar
pub fn render_category_table(totals: &[CategoryTotal], settings: &Settings) -> String {
    if totals.is_empty() {
        return "No expense records yet.".to_string();
    }
    let max_total = totals.first().map(|t| t.total).unwrap_or(0.0);

    #[derive(Tabled)]
    struct CategoryRow {
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "Total")]
        total: String,
        #[tabled(rename = "Entries")]
        entries: usize,
        #[tabled(rename = "Share")]
        bar: String,
    }

    let rows: Vec<CategoryRow> = totals
        .iter()
        .map(|t| CategoryRow {
            category: t.category.clone(),
            total: format_money(t.total, &settings.currency_symbol),
            entries: t.expense_count,
            bar: format_bar(t.total, max_total, BAR_WIDTH),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the headline summary block
pub fn render_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut out = String::new();
    out.push_str(&separator(44));
    out.push('\n');
    out.push_str(&format!(
        "Monthly allowance: {}   ({}/business day)\n",
        format_money(settings.monthly_allowance, symbol),
        format_money(settings.daily_allowance(), symbol),
    ));
    out.push_str(&format!(
        "Total spent:       {} over {} day(s)\n",
        format_money(summary.total_spent, symbol),
        summary.total_days,
    ));
    out.push_str(&format!(
        "Total allowance:   {}\n",
        format_money(summary.total_allowance, symbol)
    ));
    out.push_str(&format!(
        "Total savings:     {} ({})\n",
        format_money(summary.total_savings, symbol),
        format_percentage(summary.savings_rate),
    ));
    out.push_str(&format!(
        "Top category:      {}\n",
        summary.top_category.as_deref().unwrap_or("none")
    ));
    out.push_str(&separator(44));
    out
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Flat Average")]
    flat: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

/// Render a forecast result
pub fn render_forecast(forecast: &Forecast, settings: &Settings) -> String {
    let table = match forecast {
        Forecast::InsufficientData { observed, required } => {
            return format!(
                "Not enough data for forecasting: {} day(s) observed, need at least {}.",
                observed, required
            );
        }
        Forecast::Ready(table) => table,
    };

    let rows: Vec<ForecastRow> = table
        .dates
        .iter()
        .enumerate()
        .map(|(i, date)| ForecastRow {
            date: date.format(&settings.date_format).to_string(),
            flat: format_money(table.flat[i], &settings.currency_symbol),
            trend: table
                .trend
                .as_ref()
                .map(|t| format_money(t[i], &settings.currency_symbol))
                .unwrap_or_else(|| "n/a (need 5+ days)".to_string()),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
