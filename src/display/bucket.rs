//! Bucket rendering

use std::fmt::Write;

use crate::models::Bucket;

use super::format::{separator, truncate};

/// Format a table of buckets in waterfall order
pub fn format_bucket_list(buckets: &[Bucket]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<4} {:<28} {:>14} {:>12} {:<10} {}",
        "Pri", "Name", "Target", "Withdrawn", "Status", "Deadline"
    );
    let _ = writeln!(out, "{}", separator(84));

    for bucket in buckets {
        let deadline = bucket
            .deadline
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:<4} {:<28} {:>14} {:>12} {:<10} {}",
            bucket.priority,
            truncate(&bucket.name, 28),
            bucket.target.to_string(),
            bucket.total_withdrawn().to_string(),
            bucket.status.to_string(),
            deadline
        );
    }

    out
}

/// Format a bucket's withdrawal history
pub fn format_withdrawal_history(bucket: &Bucket) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Withdrawals from '{}':", bucket.name);
    let _ = writeln!(out, "{}", separator(64));

    if bucket.withdrawals.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }

    for withdrawal in &bucket.withdrawals {
        let _ = writeln!(
            out,
            "  {}  {:>12}  {}",
            withdrawal.date,
            withdrawal.amount.to_string(),
            truncate(&withdrawal.note, 32)
        );
    }

    let _ = writeln!(out, "{}", separator(64));
    let _ = writeln!(out, "  Total: {}", bucket.total_withdrawn());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Withdrawal};
    use chrono::NaiveDate;

    #[test]
    fn test_bucket_list() {
        let bucket = Bucket::new("Emergency Fund", Money::from_cents(500_000), 1);
        let text = format_bucket_list(&[bucket]);
        assert!(text.contains("Emergency Fund"));
        assert!(text.contains("$5000.00"));
        assert!(text.contains("active"));
    }

    #[test]
    fn test_withdrawal_history() {
        let mut bucket = Bucket::new("Vacation", Money::from_cents(100_000), 1);
        let empty = format_withdrawal_history(&bucket);
        assert!(empty.contains("(none)"));

        bucket.add_withdrawal(Withdrawal::new(
            Money::from_cents(2_500),
            "flights",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        ));
        let text = format_withdrawal_history(&bucket);
        assert!(text.contains("flights"));
        assert!(text.contains("Total: $25.00"));
    }
}
