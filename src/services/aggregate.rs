//! Aggregation over sanitized records
//!
//! Builds the business-day daily series used for charts and forecasts,
//! per-category totals, and the headline summary metrics against a
//! configured daily allowance.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::calendar::business_days_between;
use crate::models::ExpenseRecord;

/// One business day of aggregated spending
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub total_spent: f64,
    pub expense_count: usize,
    pub daily_allowance: f64,
    pub daily_savings: f64,
}

/// Total spend for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub expense_count: usize,
}

/// Headline metrics over the full record set
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_spent: f64,
    /// Distinct dates with at least one record
    pub total_days: usize,
    pub total_allowance: f64,
    pub total_savings: f64,
    /// Percentage of the allowance kept; zero when no allowance accrued
    pub savings_rate: f64,
    /// Highest-total category, None when there are no records
    pub top_category: Option<String>,
}

/// Group records by date and reindex onto the contiguous business-day range
///
/// Missing business days inside `[min(date), max(date)]` appear with zero
/// spend and zero count, so sparse logging does not skew charts or
/// forecasts. Weekend-dated records still count toward totals elsewhere but
/// produce no series entry.
pub fn daily_series(records: &[ExpenseRecord], daily_allowance: f64) -> Vec<DailyAggregate> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_date.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    // BTreeMap keys are ordered, so first/last give the observed span
    let (Some(&start), Some(&end)) = (by_date.keys().next(), by_date.keys().next_back()) else {
        return Vec::new();
    };

    business_days_between(start, end)
        .into_iter()
        .map(|date| {
            let (total_spent, expense_count) = by_date.get(&date).copied().unwrap_or((0.0, 0));
            DailyAggregate {
                date,
                total_spent,
                expense_count,
                daily_allowance,
                daily_savings: daily_allowance - total_spent,
            }
        })
        .collect()
}

/// Group records by category, sorted descending by total
///
/// Ties break on category name so the ordering is deterministic.
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_category.entry(record.category.as_str()).or_insert((0.0, 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, expense_count))| CategoryTotal {
            category: category.to_string(),
            total,
            expense_count,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

/// Compute the headline summary metrics
pub fn summary(records: &[ExpenseRecord], daily_allowance: f64) -> Summary {
    let total_spent: f64 = records.iter().map(|r| r.amount).sum();
    let total_days = records
        .iter()
        .map(|r| r.date)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let total_allowance = total_days as f64 * daily_allowance;
    let total_savings = total_allowance - total_spent;
    let savings_rate = if total_allowance == 0.0 {
        0.0
    } else {
        total_savings / total_allowance * 100.0
    };
    let top_category = category_totals(records)
        .into_iter()
        .next()
        .map(|t| t.category);

    Summary {
        total_spent,
        total_days,
        total_allowance,
        total_savings,
        savings_rate,
        top_category,
    }
}

/// Trim the display series to the most recent window when it spans too long
///
/// Returns the slice to chart and an optional notice for the user. The full
/// series (and all metrics) remain untouched; only the display view narrows.
pub fn windowed_series(
    series: &[DailyAggregate],
    window_days: usize,
) -> (&[DailyAggregate], Option<String>) {
    if window_days == 0 || series.len() <= window_days {
        return (series, None);
    }
    let start = series.len() - window_days;
    let notice = format!(
        "Showing the most recent {} business days of {}; totals still cover everything.",
        window_days,
        series.len()
    );
    (&series[start..], Some(notice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date_: NaiveDate, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(date_, "test", amount, category)
    }

    #[test]
    fn test_empty_records_empty_series() {
        assert!(daily_series(&[], 250.0).is_empty());
    }

    #[test]
    fn test_reindex_fills_business_days_only() {
        // Monday 2025-03-03 and Friday 2025-03-07 observed; Tue/Wed/Thu must
        // appear with zero spend, Sat/Sun must not appear at all.
        let records = vec![
            record(date(2025, 3, 3), 100.0, "Food"),
            record(date(2025, 3, 7), 50.0, "Food"),
        ];
        let series = daily_series(&records, 250.0);
        let dates: Vec<NaiveDate> = series.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 3, 3),
                date(2025, 3, 4),
                date(2025, 3, 5),
                date(2025, 3, 6),
                date(2025, 3, 7),
            ]
        );
        assert_eq!(series[1].total_spent, 0.0);
        assert_eq!(series[2].total_spent, 0.0);
        assert_eq!(series[3].total_spent, 0.0);
        assert_eq!(series[1].expense_count, 0);
    }

    #[test]
    fn test_reindex_across_weekend_gap() {
        // Monday and the Friday of the following week: intervening Sat/Sun
        // excluded, all weekdays filled.
        let records = vec![
            record(date(2025, 3, 3), 100.0, "Food"),
            record(date(2025, 3, 14), 50.0, "Food"),
        ];
        let series = daily_series(&records, 250.0);
        assert_eq!(series.len(), 10);
        assert!(series.iter().all(|d| {
            use chrono::Datelike;
            !matches!(d.date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
        }));
        let zero_days = series.iter().filter(|d| d.total_spent == 0.0).count();
        assert_eq!(zero_days, 8);
    }

    #[test]
    fn test_daily_savings_math() {
        let records = vec![
            record(date(2025, 3, 3), 100.0, "Food"),
            record(date(2025, 3, 3), 30.0, "Transport"),
        ];
        let series = daily_series(&records, 250.0);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_spent, 130.0);
        assert_eq!(series[0].expense_count, 2);
        assert_eq!(series[0].daily_savings, 120.0);
    }

    #[test]
    fn test_category_totals_sorted_descending() {
        let records = vec![
            record(date(2025, 3, 3), 20.0, "Transport"),
            record(date(2025, 3, 3), 100.0, "Food"),
            record(date(2025, 3, 4), 60.0, "Food"),
            record(date(2025, 3, 4), 20.0, "Leisure"),
        ];
        let totals = category_totals(&records);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, 160.0);
        assert_eq!(totals[0].expense_count, 2);
        // Tie between Transport and Leisure resolves alphabetically
        assert_eq!(totals[1].category, "Leisure");
        assert_eq!(totals[2].category, "Transport");
    }

    #[test]
    fn test_summary_division_guard() {
        let s = summary(&[], 250.0);
        assert_eq!(s.total_days, 0);
        assert_eq!(s.total_allowance, 0.0);
        assert_eq!(s.savings_rate, 0.0);
        assert_eq!(s.top_category, None);
    }

    #[test]
    fn test_summary_end_to_end_scenario() {
        // 5000 monthly over a 20-weekday month gives 250/day; 300 + 100
        // across two business days.
        let daily = crate::models::calendar::daily_allowance(5000.0, 2025, 2);
        assert_eq!(daily, 250.0);
        let records = vec![
            record(date(2025, 2, 3), 300.0, "Food"),
            record(date(2025, 2, 4), 100.0, "Transport"),
        ];
        let s = summary(&records, daily);
        assert_eq!(s.total_spent, 400.0);
        assert_eq!(s.total_days, 2);
        assert_eq!(s.total_allowance, 500.0);
        assert_eq!(s.total_savings, 100.0);
        assert_eq!(s.savings_rate, 20.0);
        assert_eq!(s.top_category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_windowed_series_trims_and_notices() {
        let records = vec![
            record(date(2025, 1, 1), 10.0, "Food"),
            record(date(2025, 6, 30), 10.0, "Food"),
        ];
        let series = daily_series(&records, 250.0);
        assert!(series.len() > 120);
        let (window, notice) = windowed_series(&series, 120);
        assert_eq!(window.len(), 120);
        assert!(notice.is_some());
        assert_eq!(window.last().unwrap().date, date(2025, 6, 30));
    }

    #[test]
    fn test_windowed_series_noop_when_short() {
        let records = vec![record(date(2025, 3, 3), 10.0, "Food")];
        let series = daily_series(&records, 250.0);
        let (window, notice) = windowed_series(&series, 120);
        assert_eq!(window.len(), series.len());
        assert!(notice.is_none());
    }
}
