//! Business-day calendar helpers
//!
//! The allowance is budgeted across weekdays only: Monday through Friday,
//! no holiday calendar. These helpers back the aggregator's reindexing,
//! the forecaster's future-date generation, and the allowance derivation.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Whether `date` falls on a weekday (Mon-Fri)
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All business days in `[start, end]` inclusive, in order
///
/// Returns an empty Vec when `start > end`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            days.push(current);
        }
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// The next `n` business days strictly after `after`
pub fn next_business_days(after: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(n);
    let mut current = after;
    while days.len() < n {
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
        if is_business_day(current) {
            days.push(current);
        }
    }
    days
}

/// Number of weekdays in the given month
pub fn weekday_count(year: i32, month: u32) -> usize {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let last = last_day_of_month(first);
    business_days_between(first, last).len()
}

/// Daily allowance for a month: the monthly figure spread across weekdays
///
/// The weekday count is the single derivation used everywhere; zero weekdays
/// (or an invalid month) yields a zero allowance rather than a division error.
pub fn daily_allowance(monthly_allowance: f64, year: i32, month: u32) -> f64 {
    let weekdays = weekday_count(year, month);
    if weekdays == 0 {
        0.0
    } else {
        monthly_allowance / weekdays as f64
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_detection() {
        // 2025-03-08 is a Saturday, 2025-03-10 a Monday
        assert!(!is_business_day(date(2025, 3, 8)));
        assert!(!is_business_day(date(2025, 3, 9)));
        assert!(is_business_day(date(2025, 3, 10)));
    }

    #[test]
    fn test_business_days_skip_weekend() {
        // Friday 2025-03-07 through Monday 2025-03-10
        let days = business_days_between(date(2025, 3, 7), date(2025, 3, 10));
        assert_eq!(days, vec![date(2025, 3, 7), date(2025, 3, 10)]);
    }

    #[test]
    fn test_business_days_empty_when_reversed() {
        assert!(business_days_between(date(2025, 3, 10), date(2025, 3, 7)).is_empty());
    }

    #[test]
    fn test_next_business_days_cross_weekend() {
        // After Friday 2025-03-07: Mon 10, Tue 11, Wed 12
        let days = next_business_days(date(2025, 3, 7), 3);
        assert_eq!(
            days,
            vec![date(2025, 3, 10), date(2025, 3, 11), date(2025, 3, 12)]
        );
    }

    #[test]
    fn test_weekday_count() {
        // March 2025 has 21 weekdays, February 2025 has 20
        assert_eq!(weekday_count(2025, 3), 21);
        assert_eq!(weekday_count(2025, 2), 20);
    }

    #[test]
    fn test_daily_allowance_derivation() {
        // 5000 over February 2025's 20 weekdays
        let daily = daily_allowance(5000.0, 2025, 2);
        assert!((daily - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_daily_allowance_invalid_month_is_zero() {
        assert_eq!(daily_allowance(5000.0, 2025, 13), 0.0);
    }
}
