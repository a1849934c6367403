//! Dashboard service
//!
//! Bridges the record store and the financial state calculator: loads the
//! full month and bucket collections and derives the current state.

use crate::engine;
use crate::error::FinboardResult;
use crate::models::{FinancialState, MonthKey};
use crate::storage::Storage;

/// Service that derives the financial state from stored records
pub struct DashboardService<'a> {
    storage: &'a Storage,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Derive the financial state as of the current calendar month
    pub fn financial_state(&self) -> FinboardResult<FinancialState> {
        self.financial_state_at(MonthKey::current())
    }

    /// Derive the financial state as of a specific month
    ///
    /// The state is recomputed from scratch on every call; it is a
    /// projection of the stored records, never cached or persisted.
    pub fn financial_state_at(&self, current: MonthKey) -> FinboardResult<FinancialState> {
        let months = self.storage.months.get_all()?;
        let buckets = self.storage.buckets.get_all()?;
        Ok(engine::compute(&months, &buckets, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinboardPaths;
    use crate::models::Money;
    use crate::services::{BucketService, MonthFields, MonthService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_state_over_stored_records() {
        let (_temp_dir, storage) = create_test_storage();

        let months = MonthService::new(&storage);
        months
            .set_month(
                "2024-01".parse().unwrap(),
                MonthFields {
                    income: Some(Money::from_cents(100_000)),
                    fixed_expenses: Some(Money::from_cents(30_000)),
                    variable_expenses: Some(Money::from_cents(10_000)),
                    ..Default::default()
                },
            )
            .unwrap();

        let buckets = BucketService::new(&storage);
        buckets.create("b1", Money::from_cents(50_000)).unwrap();

        let service = DashboardService::new(&storage);
        let state = service
            .financial_state_at("2024-01".parse().unwrap())
            .unwrap();

        assert_eq!(state.real_balance.cents(), 60_000);
        assert_eq!(state.buckets[0].gross_allocated.cents(), 50_000);
        assert_eq!(state.unallocated_cash.cents(), 10_000);
    }

    #[test]
    fn test_empty_store_yields_zero_state() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DashboardService::new(&storage);

        let state = service
            .financial_state_at("2024-01".parse().unwrap())
            .unwrap();
        assert_eq!(state.net_worth, Money::zero());
        assert!(state.buckets.is_empty());
    }
}
