//! Core data models for the allowance tracker
//!
//! This module contains the data structures that represent the tracking
//! domain: expense records, raw input rows, categories, and the business-day
//! calendar used for allowance math.

pub mod calendar;
pub mod category;
pub mod raw;
pub mod record;

pub use category::CategorySet;
pub use raw::{FieldOutcome, RawField, RawRow};
pub use record::{ExpenseRecord, DEFAULT_CATEGORY, DEFAULT_LABEL, EPOCH_FLOOR};
