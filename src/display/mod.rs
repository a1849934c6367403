//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, colors, and progress bars.

pub mod bucket;
pub mod dashboard;
pub mod format;
pub mod month;

pub use bucket::{format_bucket_list, format_withdrawal_history};
pub use dashboard::format_dashboard;
pub use month::{format_month_details, format_month_list};
