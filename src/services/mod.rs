//! Service layer for finboard
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and cross-entity operations.

pub mod bucket;
pub mod dashboard;
pub mod month;

pub use bucket::BucketService;
pub use dashboard::DashboardService;
pub use month::{MonthFields, MonthService};
