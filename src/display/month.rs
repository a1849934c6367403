//! Month record rendering

use std::fmt::Write;

use crate::models::MonthRecord;

use super::format::{format_money_colored, separator, truncate};

/// Format a table of month records
pub fn format_month_list(records: &[MonthRecord]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<9} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Income", "Fixed", "Variable", "SIP", "Liquid", "Surplus"
    );
    let _ = writeln!(out, "{}", separator(88));

    for record in records {
        let _ = writeln!(
            out,
            "{:<9} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
            record.key.to_string(),
            record.income.to_string(),
            record.fixed_expenses.to_string(),
            record.variable_expenses.to_string(),
            record.total_sip().to_string(),
            record.liquid_funds.to_string(),
            format_money_colored(record.surplus()),
        );
    }

    out
}

/// Format a single month record in detail
pub fn format_month_details(record: &MonthRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Month: {}", record.key);
    let _ = writeln!(out, "{}", separator(48));
    let _ = writeln!(out, "Income:            {}", record.income);
    let _ = writeln!(out, "Fixed expenses:    {}", record.fixed_expenses);
    let _ = writeln!(out, "Variable expenses: {}", record.variable_expenses);
    let _ = writeln!(out, "Liquid funds:      {}", record.liquid_funds);
    let _ = writeln!(out, "Legacy SIP:        {}", record.legacy_sip);
    let _ = writeln!(
        out,
        "Surplus:           {}",
        format_money_colored(record.surplus())
    );

    if !record.sip_entries.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "SIP entries:");
        for entry in &record.sip_entries {
            let _ = writeln!(
                out,
                "  {:<28} {:>12}",
                truncate(entry.effective_name(), 28),
                entry.amount.to_string()
            );
        }
    }

    if !record.expense_lines.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Expense lines:");
        for line in &record.expense_lines {
            let _ = writeln!(
                out,
                "  {}  {:<26} {:>12}",
                line.id,
                truncate(&line.desc, 26),
                line.amount.to_string()
            );
        }
    }

    out
}
