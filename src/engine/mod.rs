//! Financial state calculator
//!
//! The single deterministic transform at the heart of finboard:
//! `(month records, buckets, current month) -> FinancialState`.
//!
//! The computation runs in three steps:
//!
//! 1. Fold over the month history in chronological order, accumulating the
//!    gross liquid pool, investment totals, and averaging stats.
//! 2. Distribute the gross pool across buckets as a greedy waterfall in
//!    priority order: each bucket is filled to its full target before the
//!    next receives anything.
//! 3. Derive the final aggregates (real balance, net worth, unallocated
//!    remainder).
//!
//! The function is pure: it never mutates its inputs, performs no I/O, and
//! is total over its input domain. Malformed numeric data is already
//! coerced to zero at the serde boundary, so there is nothing left to fail
//! here.

use crate::models::{
    Bucket, BucketSummary, FinancialState, InvestmentTotals, Money, MonthKey, MonthRecord,
    MonthlyAverages,
};

/// Aggregation name for the backward-compat single-scalar SIP amount
pub const GENERAL_SIP_NAME: &str = "General SIP";

/// Running sums for the monthly averages
///
/// Only months with positive income contribute; placeholder months with no
/// income would otherwise drag every average toward zero.
#[derive(Debug, Clone, Copy, Default)]
struct AverageStats {
    income: Money,
    fixed: Money,
    variable: Money,
    sip: Money,
    liquid: Money,
    count: i64,
}

impl AverageStats {
    fn averages(&self) -> MonthlyAverages {
        let spent = self.fixed + self.variable;
        let invested = self.sip + self.liquid;
        MonthlyAverages {
            surplus: (self.income - (spent + invested)).div_or_zero(self.count),
            spending: spent.div_or_zero(self.count),
            investing: invested.div_or_zero(self.count),
        }
    }
}

/// Accumulator for the chronological fold over month records
#[derive(Debug, Clone, Default)]
struct Accumulation {
    /// Lifetime cumulative surplus up to and including the current month
    gross_pool: Money,
    investments: InvestmentTotals,
    stats: AverageStats,
}

impl Accumulation {
    /// Fold one month into the accumulator
    ///
    /// Per-name investment totals accumulate across every month, including
    /// future-dated ones; the gross pool and the sip/liquid totals only
    /// accumulate through the current month. That asymmetry is intentional
    /// and pinned by tests.
    fn absorb(mut self, month: &MonthRecord, current: MonthKey) -> Self {
        let total_sip = month.total_sip();

        if month.legacy_sip.is_positive() {
            self.investments
                .accumulate_named(GENERAL_SIP_NAME, month.legacy_sip);
        }
        for entry in &month.sip_entries {
            self.investments
                .accumulate_named(entry.effective_name(), entry.amount);
        }

        if month.key <= current {
            self.gross_pool += month.surplus();
            self.investments.sip += total_sip;
            self.investments.liquid += month.liquid_funds;
        }

        if month.income.is_positive() {
            self.stats.income += month.income;
            self.stats.fixed += month.fixed_expenses;
            self.stats.variable += month.variable_expenses;
            self.stats.sip += total_sip;
            self.stats.liquid += month.liquid_funds;
            self.stats.count += 1;
        }

        self
    }
}

/// Compute the derived financial state from the full history
///
/// Input order is irrelevant: months are re-sorted by key and buckets by
/// priority (stable, so priority ties keep their input order).
pub fn compute(months: &[MonthRecord], buckets: &[Bucket], current: MonthKey) -> FinancialState {
    // Step 1: chronological accumulation
    let mut ordered_months: Vec<&MonthRecord> = months.iter().collect();
    ordered_months.sort_by_key(|m| m.key);

    let acc = ordered_months
        .into_iter()
        .fold(Accumulation::default(), |acc, month| {
            acc.absorb(month, current)
        });

    // Step 2: waterfall allocation in priority order
    let mut ordered_buckets: Vec<&Bucket> = buckets.iter().collect();
    ordered_buckets.sort_by_key(|b| b.priority);

    let mut remaining = acc.gross_pool;
    let mut total_withdrawals = Money::zero();
    let mut summaries = Vec::with_capacity(ordered_buckets.len());

    for bucket in ordered_buckets {
        let withdrawn = bucket.total_withdrawn();
        total_withdrawals += withdrawn;

        let allocated = if remaining >= bucket.target {
            remaining -= bucket.target;
            bucket.target
        } else if remaining.is_positive() {
            let rest = remaining;
            remaining = Money::zero();
            rest
        } else {
            Money::zero()
        };

        summaries.push(BucketSummary {
            bucket: bucket.clone(),
            gross_allocated: allocated,
            current_balance: allocated - withdrawn,
            total_spent: withdrawn,
        });
    }

    // Step 3: final aggregates. Withdrawals reduce real cash regardless of
    // how much was ever allocated; allocation is only a bookkeeping
    // partition of the same pool.
    let real_balance = acc.gross_pool - total_withdrawals;
    let net_worth = real_balance + acc.investments.sip + acc.investments.liquid;

    FinancialState {
        real_balance,
        net_worth,
        unallocated_cash: remaining,
        investments: acc.investments,
        buckets: summaries,
        monthly_avgs: acc.stats.averages(),
    }
}
