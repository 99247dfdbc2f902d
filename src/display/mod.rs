//! Rendering layer
//!
//! Pure functions of derived state returning display strings; no I/O and
//! no mutation happen here. The CLI prints whatever these produce after
//! each command.

pub mod report;
pub mod tables;

pub use report::{format_bar, format_money, format_percentage, separator};
pub use tables::{
    render_category_table, render_daily_table, render_forecast, render_records, render_summary,
};
