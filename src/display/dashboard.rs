//! Dashboard rendering
//!
//! Formats the derived financial state for terminal display.

use std::fmt::Write;

use crate::models::{FinancialState, MonthKey};

use super::format::{double_separator, format_bar, format_money_colored, separator, truncate};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Render the full dashboard
pub fn format_dashboard(state: &FinancialState, as_of: MonthKey) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Financial Dashboard — {}", as_of);
    let _ = writeln!(out, "{}", double_separator(WIDTH));
    let _ = writeln!(
        out,
        "Net worth:        {}",
        format_money_colored(state.net_worth)
    );
    let _ = writeln!(
        out,
        "Liquid balance:   {}",
        format_money_colored(state.real_balance)
    );
    let _ = writeln!(
        out,
        "Unallocated cash: {}",
        format_money_colored(state.unallocated_cash)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Investments");
    let _ = writeln!(out, "{}", separator(WIDTH));
    let _ = writeln!(out, "  SIP total:      {}", state.investments.sip);
    let _ = writeln!(out, "  Liquid funds:   {}", state.investments.liquid);
    if !state.investments.by_name.is_empty() {
        let _ = writeln!(out, "  Lifetime by name:");
        for entry in &state.investments.by_name {
            let _ = writeln!(
                out,
                "    {:<24} {:>14}",
                truncate(&entry.name, 24),
                entry.total.to_string()
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Savings Buckets");
    let _ = writeln!(out, "{}", separator(WIDTH));
    if state.buckets.is_empty() {
        let _ = writeln!(out, "  (none — add one with 'finboard bucket add')");
    } else {
        for summary in &state.buckets {
            let bucket = &summary.bucket;
            let marker = if bucket.is_completed() { " [done]" } else { "" };
            let _ = writeln!(
                out,
                "  {}. {}{}",
                bucket.priority,
                truncate(&bucket.name, 30),
                marker
            );
            let _ = writeln!(
                out,
                "     {} {:>12} / {:>12}{}",
                format_bar(
                    summary.current_balance.cents().max(0) as f64,
                    bucket.target.cents().max(0) as f64,
                    BAR_WIDTH
                ),
                format_money_colored(summary.current_balance),
                bucket.target.to_string(),
                if summary.is_overdrawn() { "  OVERDRAWN" } else { "" }
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Monthly Averages (earning months only)");
    let _ = writeln!(out, "{}", separator(WIDTH));
    let _ = writeln!(
        out,
        "  Surplus:   {}",
        format_money_colored(state.monthly_avgs.surplus)
    );
    let _ = writeln!(out, "  Spending:  {}", state.monthly_avgs.spending);
    let _ = writeln!(out, "  Investing: {}", state.monthly_avgs.investing);

    out
}
