//! CSV export functionality
//!
//! Exports the month history as a flat table for spreadsheets. Amounts are
//! written in whole currency units with two decimals.

use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::models::Money;
use crate::storage::Storage;

/// Export all month records to CSV, ascending by month
pub fn export_months_csv<W: Write>(storage: &Storage, writer: W) -> FinboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Month",
            "Income",
            "Fixed Expenses",
            "Variable Expenses",
            "SIP Total",
            "Liquid Funds",
            "Surplus",
        ])
        .map_err(|e| FinboardError::Export(e.to_string()))?;

    for record in storage.months.get_all()? {
        csv_writer
            .write_record([
                record.key.to_string(),
                decimal(record.income),
                decimal(record.fixed_expenses),
                decimal(record.variable_expenses),
                decimal(record.total_sip()),
                decimal(record.liquid_funds),
                decimal(record.surplus()),
            ])
            .map_err(|e| FinboardError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinboardError::Export(e.to_string()))?;
    Ok(())
}

/// Plain decimal rendering without a currency symbol
fn decimal(amount: Money) -> String {
    if amount.is_negative() {
        format!("-{}.{:02}", amount.dollars().abs(), amount.cents_part())
    } else {
        format!("{}.{:02}", amount.dollars(), amount.cents_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinboardPaths;
    use crate::models::MonthRecord;
    use tempfile::TempDir;

    #[test]
    fn test_export_months_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut jan = MonthRecord::new("2024-01".parse().unwrap());
        jan.income = Money::from_cents(100_050);
        jan.fixed_expenses = Money::from_cents(30_000);
        storage.months.upsert(jan).unwrap();

        let mut feb = MonthRecord::new("2024-02".parse().unwrap());
        feb.fixed_expenses = Money::from_cents(5_000);
        storage.months.upsert(feb).unwrap();

        let mut out = Vec::new();
        export_months_csv(&storage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Month,Income"));
        assert_eq!(lines[1], "2024-01,1000.50,300.00,0.00,0.00,0.00,700.50");
        // Deficit month renders a negative surplus
        assert_eq!(lines[2], "2024-02,0.00,50.00,0.00,0.00,0.00,-50.00");
    }
}
