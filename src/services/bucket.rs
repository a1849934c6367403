//! Bucket service
//!
//! Business logic for savings buckets: creation with automatic priority
//! assignment, withdrawals, priority reordering, and lifecycle changes.

use chrono::NaiveDate;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Bucket, BucketId, BucketStatus, Money, Withdrawal};
use crate::storage::Storage;

/// Service for bucket management
pub struct BucketService<'a> {
    storage: &'a Storage,
}

impl<'a> BucketService<'a> {
    /// Create a new bucket service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a bucket at the end of the waterfall (next free priority)
    pub fn create(&self, name: &str, target: Money) -> FinboardResult<Bucket> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinboardError::Validation("Bucket name cannot be empty".into()));
        }
        if self.storage.buckets.name_exists(name, None)? {
            return Err(FinboardError::Duplicate {
                entity_type: "Bucket",
                identifier: name.to_string(),
            });
        }
        if target.is_negative() {
            return Err(FinboardError::Validation(
                "Bucket target cannot be negative".into(),
            ));
        }

        let priority = self.storage.buckets.next_priority()?;
        let bucket = Bucket::new(name, target, priority);

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;

        Ok(bucket)
    }

    /// Look up a bucket by name or id string
    pub fn resolve(&self, identifier: &str) -> FinboardResult<Bucket> {
        if let Some(bucket) = self.storage.buckets.get_by_name(identifier)? {
            return Ok(bucket);
        }
        if let Ok(id) = identifier.parse::<BucketId>() {
            if let Some(bucket) = self.storage.buckets.get(id)? {
                return Ok(bucket);
            }
        }
        Err(FinboardError::bucket_not_found(identifier))
    }

    /// List all buckets in waterfall order
    pub fn list(&self) -> FinboardResult<Vec<Bucket>> {
        self.storage.buckets.get_all()
    }

    /// Rename a bucket
    pub fn rename(&self, id: BucketId, new_name: &str) -> FinboardResult<Bucket> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(FinboardError::Validation("Bucket name cannot be empty".into()));
        }
        if self.storage.buckets.name_exists(new_name, Some(id))? {
            return Err(FinboardError::Duplicate {
                entity_type: "Bucket",
                identifier: new_name.to_string(),
            });
        }

        let mut bucket = self.get(id)?;
        bucket.name = new_name.to_string();
        bucket.touch();

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;
        Ok(bucket)
    }

    /// Change a bucket's target amount
    pub fn set_target(&self, id: BucketId, target: Money) -> FinboardResult<Bucket> {
        if target.is_negative() {
            return Err(FinboardError::Validation(
                "Bucket target cannot be negative".into(),
            ));
        }

        let mut bucket = self.get(id)?;
        bucket.target = target;
        bucket.touch();

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;
        Ok(bucket)
    }

    /// Set or clear the advisory deadline
    pub fn set_deadline(&self, id: BucketId, deadline: Option<NaiveDate>) -> FinboardResult<Bucket> {
        let mut bucket = self.get(id)?;
        bucket.deadline = deadline;
        bucket.touch();

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;
        Ok(bucket)
    }

    /// Record a withdrawal from a bucket
    ///
    /// Withdrawals are allowed to exceed the bucket's allocated balance;
    /// the dashboard surfaces the overdraw instead of blocking it.
    pub fn withdraw(
        &self,
        id: BucketId,
        amount: Money,
        note: &str,
        date: NaiveDate,
    ) -> FinboardResult<Bucket> {
        if !amount.is_positive() {
            return Err(FinboardError::Bucket(
                "Withdrawal amount must be positive".into(),
            ));
        }

        let mut bucket = self.get(id)?;
        bucket.add_withdrawal(Withdrawal::new(amount, note, date));

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;
        Ok(bucket)
    }

    /// Move a bucket to a 1-based position in the waterfall and renumber
    /// every bucket contiguously
    pub fn reorder(&self, id: BucketId, position: usize) -> FinboardResult<Vec<Bucket>> {
        if position == 0 {
            return Err(FinboardError::Bucket("Position is 1-based".into()));
        }

        let mut buckets = self.storage.buckets.get_all()?;
        let from = buckets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| FinboardError::bucket_not_found(id.to_string()))?;

        let moved = buckets.remove(from);
        let to = (position - 1).min(buckets.len());
        buckets.insert(to, moved);

        for (index, bucket) in buckets.iter_mut().enumerate() {
            let priority = (index + 1) as u32;
            if bucket.priority != priority {
                bucket.priority = priority;
                bucket.touch();
            }
            self.storage.buckets.upsert(bucket.clone())?;
        }
        self.storage.buckets.save()?;

        self.storage.buckets.get_all()
    }

    /// Mark a bucket completed
    ///
    /// A completed bucket keeps its waterfall slot and keeps absorbing pool
    /// up to its target; only its presentation changes.
    pub fn complete(&self, id: BucketId) -> FinboardResult<Bucket> {
        self.set_status(id, BucketStatus::Completed)
    }

    /// Reactivate a completed bucket
    pub fn reopen(&self, id: BucketId) -> FinboardResult<Bucket> {
        self.set_status(id, BucketStatus::Active)
    }

    /// Delete a bucket and renumber the remaining waterfall contiguously
    pub fn delete(&self, id: BucketId) -> FinboardResult<()> {
        if !self.storage.buckets.delete(id)? {
            return Err(FinboardError::bucket_not_found(id.to_string()));
        }

        let mut buckets = self.storage.buckets.get_all()?;
        for (index, bucket) in buckets.iter_mut().enumerate() {
            let priority = (index + 1) as u32;
            if bucket.priority != priority {
                bucket.priority = priority;
                bucket.touch();
                self.storage.buckets.upsert(bucket.clone())?;
            }
        }
        self.storage.buckets.save()?;
        Ok(())
    }

    fn get(&self, id: BucketId) -> FinboardResult<Bucket> {
        self.storage
            .buckets
            .get(id)?
            .ok_or_else(|| FinboardError::bucket_not_found(id.to_string()))
    }

    fn set_status(&self, id: BucketId, status: BucketStatus) -> FinboardResult<Bucket> {
        let mut bucket = self.get(id)?;
        bucket.status = status;
        bucket.touch();

        self.storage.buckets.upsert(bucket.clone())?;
        self.storage.buckets.save()?;
        Ok(bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinboardPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_priorities() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let first = service.create("Emergency Fund", Money::from_cents(500_000)).unwrap();
        let second = service.create("Vacation", Money::from_cents(100_000)).unwrap();

        assert_eq!(first.priority, 1);
        assert_eq!(second.priority, 2);
    }

    #[test]
    fn test_create_rejects_duplicates_and_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        service.create("Vacation", Money::zero()).unwrap();

        assert!(matches!(
            service.create("vacation", Money::zero()),
            Err(FinboardError::Duplicate { .. })
        ));
        assert!(service.create("  ", Money::zero()).is_err());
        assert!(service.create("Debt", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_resolve_by_name_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let bucket = service.create("Vacation", Money::zero()).unwrap();

        assert_eq!(service.resolve("vacation").unwrap().id, bucket.id);
        assert_eq!(
            service.resolve(&bucket.id.as_uuid().to_string()).unwrap().id,
            bucket.id
        );
        assert!(service.resolve("nope").is_err());
    }

    #[test]
    fn test_withdraw_records_history() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let bucket = service.create("Vacation", Money::from_cents(100_000)).unwrap();
        let bucket = service
            .withdraw(bucket.id, Money::from_cents(20_000), "flights", date())
            .unwrap();

        assert_eq!(bucket.withdrawals.len(), 1);
        assert_eq!(bucket.total_withdrawn().cents(), 20_000);

        assert!(service
            .withdraw(bucket.id, Money::zero(), "", date())
            .is_err());
    }

    #[test]
    fn test_reorder_renumbers_contiguously() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let a = service.create("a", Money::zero()).unwrap();
        service.create("b", Money::zero()).unwrap();
        service.create("c", Money::zero()).unwrap();

        let reordered = service.reorder(a.id, 3).unwrap();
        let names: Vec<&str> = reordered.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);

        let priorities: Vec<u32> = reordered.iter().map(|b| b.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_clamps_past_end() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let a = service.create("a", Money::zero()).unwrap();
        service.create("b", Money::zero()).unwrap();

        let reordered = service.reorder(a.id, 99).unwrap();
        let names: Vec<&str> = reordered.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_complete_and_reopen() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        let bucket = service.create("Vacation", Money::zero()).unwrap();
        let bucket = service.complete(bucket.id).unwrap();
        assert!(bucket.is_completed());

        let bucket = service.reopen(bucket.id).unwrap();
        assert!(!bucket.is_completed());
    }

    #[test]
    fn test_delete_renumbers_remaining() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BucketService::new(&storage);

        service.create("a", Money::zero()).unwrap();
        let b = service.create("b", Money::zero()).unwrap();
        service.create("c", Money::zero()).unwrap();

        service.delete(b.id).unwrap();

        let remaining = service.list().unwrap();
        let priorities: Vec<u32> = remaining.iter().map(|x| x.priority).collect();
        assert_eq!(priorities, vec![1, 2]);
    }
}
