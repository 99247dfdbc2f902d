//! Savings/spending forecasts
//!
//! Two deliberately naive projections over the daily series: a flat
//! historical average and an ordinary least-squares trend line. Both are
//! advisory, recomputed from scratch on every request, and degrade to an
//! explicit insufficient-data signal instead of erroring on short history.

use chrono::NaiveDate;

use crate::models::calendar::next_business_days;

/// Minimum history (in days) for the flat-average method
pub const MIN_FLAT_DAYS: usize = 2;

/// Minimum history (in days) before the trend line is offered
pub const MIN_TREND_DAYS: usize = 5;

/// Default forecast horizon in business days
pub const DEFAULT_HORIZON: usize = 5;

/// Projected values for the next N business days
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    /// The next N business days strictly after the last historical date
    pub dates: Vec<NaiveDate>,
    /// Flat-average projection, one value per date
    pub flat: Vec<f64>,
    /// Least-squares trend projection; None with fewer than
    /// `MIN_TREND_DAYS` of history
    pub trend: Option<Vec<f64>>,
}

/// Result of a forecast request
#[derive(Debug, Clone, PartialEq)]
pub enum Forecast {
    /// Not enough historical days to project anything
    InsufficientData { observed: usize, required: usize },
    Ready(ForecastTable),
}

impl Forecast {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Forecast the next `horizon` business days from a gap-free daily series
///
/// `values` is the historical series in date order (typically daily
/// savings); `last_date` is the date of its final entry.
pub fn forecast(values: &[f64], last_date: NaiveDate, horizon: usize) -> Forecast {
    if values.len() < MIN_FLAT_DAYS {
        return Forecast::InsufficientData {
            observed: values.len(),
            required: MIN_FLAT_DAYS,
        };
    }

    let dates = next_business_days(last_date, horizon);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let flat = vec![mean; dates.len()];

    let trend = if values.len() >= MIN_TREND_DAYS {
        fit_line(values).map(|(slope, intercept)| {
            (0..dates.len())
                .map(|step| {
                    let index = (values.len() + step) as f64;
                    slope * index + intercept
                })
                .collect()
        })
    } else {
        None
    };

    Forecast::Ready(ForecastTable { dates, flat, trend })
}

/// Ordinary least squares fit of `value = slope * index + intercept`
///
/// Indices run 0..n-1. Returns None if the denominator degenerates, which
/// cannot happen for n >= 2 but is guarded regardless.
fn fit_line(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some((slope, intercept))
}
