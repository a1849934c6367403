//! finboard - Terminal personal finance dashboard
//!
//! This library provides the core functionality for finboard, a personal
//! finance dashboard that tracks monthly income/expenses, investment
//! contributions, and prioritized savings buckets. The heart of the crate
//! is the financial state calculator in [`engine`]: a pure function that
//! folds the full month history into a liquid pool and distributes it
//! across buckets as a greedy waterfall in priority order.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (month records, buckets, money, derived state)
//! - `engine`: The financial state calculator
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `backup`: Rolling backups and all-or-nothing restore
//! - `export`: JSON archive and CSV exports
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust
//! use finboard::engine;
//! use finboard::models::{Bucket, Money, MonthRecord};
//!
//! let mut january = MonthRecord::new("2024-01".parse().unwrap());
//! january.income = Money::from_cents(250_000);
//! january.fixed_expenses = Money::from_cents(90_000);
//!
//! let fund = Bucket::new("Emergency Fund", Money::from_cents(100_000), 1);
//!
//! let state = engine::compute(&[january], &[fund], "2024-01".parse().unwrap());
//! assert_eq!(state.real_balance.cents(), 160_000);
//! assert_eq!(state.buckets[0].gross_allocated.cents(), 100_000);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FinboardError;
