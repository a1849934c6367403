//! Savings bucket model
//!
//! A bucket is a prioritized savings goal funded by the waterfall allocation
//! in the engine. Buckets record their own withdrawal history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BucketId, WithdrawalId};
use super::money::{self, Money};

/// Lifecycle status of a bucket
///
/// Status never changes how the waterfall allocates; it only affects how
/// the bucket is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BucketStatus {
    #[default]
    Active,
    Completed,
}

impl fmt::Display for BucketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A withdrawal taken from a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: WithdrawalId,

    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub amount: Money,

    #[serde(default)]
    pub note: String,

    pub date: NaiveDate,
}

impl Withdrawal {
    pub fn new(amount: Money, note: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: WithdrawalId::new(),
            amount,
            note: note.into(),
            date,
        }
    }
}

/// A prioritized savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: BucketId,

    pub name: String,

    /// Monetary goal the waterfall tries to fill
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub target: Money,

    /// Waterfall position; lower priorities are funded first
    pub priority: u32,

    #[serde(default)]
    pub status: BucketStatus,

    /// Advisory deadline; never used in allocation math
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Withdrawal history, in entry order
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bucket {
    /// Create a new active bucket
    pub fn new(name: impl Into<String>, target: Money, priority: u32) -> Self {
        let now = Utc::now();
        Self {
            id: BucketId::new(),
            name: name.into(),
            target,
            priority,
            status: BucketStatus::Active,
            deadline: None,
            withdrawals: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Lifetime sum of withdrawals taken from this bucket
    pub fn total_withdrawn(&self) -> Money {
        self.withdrawals.iter().map(|w| w.amount).sum()
    }

    /// Record a withdrawal
    pub fn add_withdrawal(&mut self, withdrawal: Withdrawal) {
        self.withdrawals.push(withdrawal);
        self.touch();
    }

    pub fn is_completed(&self) -> bool {
        self.status == BucketStatus::Completed
    }

    /// Mark the bucket as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
