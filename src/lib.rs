//! Allowance tracker - terminal-based daily allowance tracking and forecasting
//!
//! This library provides the core functionality for the allowance tracker:
//! a monthly allowance is spread across the business days of the month,
//! daily expenses are logged against it, and naive forecasts project future
//! savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, raw rows, categories, calendar)
//! - `storage`: JSON file storage layer
//! - `services`: The sanitize/aggregate/forecast pipeline, undo history,
//!   and session command handlers
//! - `export`: CSV import/export
//! - `display`: Pure rendering of state to terminal strings
//! - `cli`: Command handlers bridging clap to the services

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AllowanceError, AllowanceResult};
