//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session/service layer. One-shot commands
//! load the document, apply a single command, and save loudly; the
//! interactive shell keeps a session alive and auto-saves silently.

pub mod category;
pub mod data;
pub mod expense;
pub mod report;
pub mod shell;

pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_export, handle_import};
pub use expense::{handle_add, handle_list, handle_reset};
pub use report::{handle_daily, handle_forecast, handle_summary};
pub use shell::run_shell;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::services::Session;
use crate::storage::Storage;

/// Load the persisted document into a fresh session
pub fn load_session(storage: &Storage, settings: Settings) -> Session {
    Session::new(storage.load(), settings)
}

/// Persist the session, reporting failures (the loud save path)
pub fn save_session(storage: &Storage, session: &Session) -> AllowanceResult<()> {
    storage.save(&session.document())
}

/// Parse an optional user-supplied date, defaulting to today
pub fn parse_date_arg(arg: Option<&str>) -> AllowanceResult<NaiveDate> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
            AllowanceError::Validation(format!("Could not parse date '{}' (want YYYY-MM-DD)", text))
        }),
    }
}
