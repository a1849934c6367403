//! Derived financial state
//!
//! Output types of the financial state calculator. This is a projection of
//! the month and bucket collections, recomputed from scratch on every
//! invocation, never persisted.

use serde::Serialize;

use super::bucket::Bucket;
use super::money::Money;

/// Lifetime total for one named investment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTotal {
    pub name: String,
    pub total: Money,
}

/// Accumulated investment totals
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InvestmentTotals {
    /// SIP contributions accumulated up to and including the current month
    pub sip: Money,

    /// Liquid-fund investments accumulated up to and including the current month
    pub liquid: Money,

    /// Lifetime per-name totals, in first-seen-name order
    pub by_name: Vec<NamedTotal>,
}

impl InvestmentTotals {
    /// Accumulate an amount under a name, preserving first-seen order
    pub fn accumulate_named(&mut self, name: &str, amount: Money) {
        if let Some(entry) = self.by_name.iter_mut().find(|e| e.name == name) {
            entry.total += amount;
        } else {
            self.by_name.push(NamedTotal {
                name: name.to_string(),
                total: amount,
            });
        }
    }

    /// Look up a named total
    pub fn named(&self, name: &str) -> Option<Money> {
        self.by_name
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.total)
    }
}

/// A bucket annotated with its waterfall allocation results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    /// The input bucket, unchanged
    pub bucket: Bucket,

    /// Amount of the gross pool claimed by this bucket's target
    pub gross_allocated: Money,

    /// Allocated minus withdrawn; negative when the bucket is overdrawn
    pub current_balance: Money,

    /// Lifetime withdrawals from this bucket
    pub total_spent: Money,
}

impl BucketSummary {
    /// Fraction of the target currently covered, clamped to [0, 1]
    ///
    /// Zero for non-positive targets.
    pub fn fill_ratio(&self) -> f64 {
        if self.bucket.target.cents() <= 0 {
            return 0.0;
        }
        let ratio = self.current_balance.cents() as f64 / self.bucket.target.cents() as f64;
        ratio.clamp(0.0, 1.0)
    }

    /// Whether more has been withdrawn than was ever allocated
    pub fn is_overdrawn(&self) -> bool {
        self.current_balance.is_negative()
    }
}

/// Monthly averages over months with positive income
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MonthlyAverages {
    pub surplus: Money,
    pub spending: Money,
    pub investing: Money,
}

/// The complete derived financial state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialState {
    /// Liquid cash on hand: lifetime surplus minus lifetime withdrawals
    pub real_balance: Money,

    /// Real balance plus accumulated investments
    pub net_worth: Money,

    /// Liquid pool left unclaimed after the waterfall; negative in deficit
    pub unallocated_cash: Money,

    /// Accumulated investment totals
    pub investments: InvestmentTotals,

    /// Buckets in waterfall order with their allocation results
    pub buckets: Vec<BucketSummary>,

    /// Averages over months with positive income
    pub monthly_avgs: MonthlyAverages,
}

impl Default for NamedTotal {
    fn default() -> Self {
        Self {
            name: String::new(),
            total: Money::zero(),
        }
    }
}

impl Default for BucketSummary {
    fn default() -> Self {
        Self {
            bucket: Bucket::new("", Money::zero(), 1),
            gross_allocated: Money::zero(),
            current_balance: Money::zero(),
            total_spent: Money::zero(),
        }
    }
}
