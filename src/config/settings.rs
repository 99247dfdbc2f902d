//! User settings for the allowance tracker
//!
//! Manages the monthly allowance, the budget month, and display/forecast
//! preferences. Stored as JSON next to the data directory.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::paths::AllowancePaths;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::calendar;

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_allowance() -> f64 {
    5000.0
}

fn default_year() -> i32 {
    Local::now().date_naive().year()
}

fn default_month() -> u32 {
    Local::now().date_naive().month()
}

fn default_forecast_horizon() -> usize {
    5
}

fn default_display_window_days() -> usize {
    120
}

fn default_currency() -> String {
    "₱".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly allowance to spread across the month's weekdays
    #[serde(default = "default_monthly_allowance")]
    pub monthly_allowance: f64,

    /// Budget year
    #[serde(default = "default_year")]
    pub year: i32,

    /// Budget month (1-12)
    #[serde(default = "default_month")]
    pub month: u32,

    /// Forecast horizon in business days
    #[serde(default = "default_forecast_horizon")]
    pub forecast_horizon: usize,

    /// Maximum business days shown in the daily series view
    #[serde(default = "default_display_window_days")]
    pub display_window_days: usize,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_allowance: default_monthly_allowance(),
            year: default_year(),
            month: default_month(),
            forecast_horizon: default_forecast_horizon(),
            display_window_days: default_display_window_days(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Daily allowance for the configured month
    ///
    /// Always derived from the true weekday count of the month.
    pub fn daily_allowance(&self) -> f64 {
        calendar::daily_allowance(self.monthly_allowance, self.year, self.month)
    }

    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &AllowancePaths) -> AllowanceResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            let data = std::fs::read_to_string(&path).map_err(|e| {
                AllowanceError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&data).map_err(|e| {
                AllowanceError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllowancePaths) -> AllowanceResult<()> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json).map_err(|e| {
            AllowanceError::Config(format!("Failed to write settings: {}", e))
        })
    }

    /// Validate user-supplied month/allowance updates
    pub fn validate(&self) -> AllowanceResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(AllowanceError::Validation(format!(
                "Month must be 1-12, got {}",
                self.month
            )));
        }
        if self.monthly_allowance < 0.0 {
            return Err(AllowanceError::Validation(
                "Monthly allowance cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
