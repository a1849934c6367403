//! Core data models for finboard
//!
//! This module contains all the data structures that represent the domain:
//! monthly financial records, savings buckets, and the derived financial
//! state the engine produces.

pub mod bucket;
pub mod ids;
pub mod money;
pub mod month;
pub mod state;

pub use bucket::{Bucket, BucketStatus, Withdrawal};
pub use ids::{BucketId, ExpenseId, WithdrawalId};
pub use money::Money;
pub use month::{ExpenseLine, MonthKey, MonthRecord, SipEntry};
pub use state::{
    BucketSummary, FinancialState, InvestmentTotals, MonthlyAverages, NamedTotal,
};
