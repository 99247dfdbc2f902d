//! Service layer for the allowance tracker
//!
//! The transformation pipeline (sanitize, aggregate, forecast) plus the
//! undo history and the session command handlers that tie them together.

pub mod aggregate;
pub mod forecast;
pub mod history;
pub mod sanitize;
pub mod session;

pub use aggregate::{CategoryTotal, DailyAggregate, Summary};
pub use forecast::{Forecast, ForecastTable};
pub use history::UndoHistory;
pub use sanitize::{sanitize_rows, SanitizeOutcome};
pub use session::Session;
