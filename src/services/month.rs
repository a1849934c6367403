//! Month record service
//!
//! Business logic for monthly financial records: upserting the scalar
//! aggregates, recording named SIP contributions, and keeping the
//! variable-expense aggregate in sync with its line items.

use crate::error::{FinboardError, FinboardResult};
use crate::models::{ExpenseId, ExpenseLine, Money, MonthKey, MonthRecord, SipEntry};
use crate::storage::Storage;

/// Scalar fields settable on a month record; `None` leaves the current
/// value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthFields {
    pub income: Option<Money>,
    pub fixed_expenses: Option<Money>,
    pub variable_expenses: Option<Money>,
    pub liquid_funds: Option<Money>,
}

/// Service for month record management
pub struct MonthService<'a> {
    storage: &'a Storage,
}

impl<'a> MonthService<'a> {
    /// Create a new month service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a month record, or an empty one for that key
    pub fn get_or_default(&self, key: MonthKey) -> FinboardResult<MonthRecord> {
        Ok(self
            .storage
            .months
            .get(key)?
            .unwrap_or_else(|| MonthRecord::new(key)))
    }

    /// Get a month record, failing if it doesn't exist
    pub fn get(&self, key: MonthKey) -> FinboardResult<MonthRecord> {
        self.storage
            .months
            .get(key)?
            .ok_or_else(|| FinboardError::month_not_found(key.to_string()))
    }

    /// List all month records in ascending key order
    pub fn list(&self) -> FinboardResult<Vec<MonthRecord>> {
        self.storage.months.get_all()
    }

    /// Create or update the scalar fields of a month record
    pub fn set_month(&self, key: MonthKey, fields: MonthFields) -> FinboardResult<MonthRecord> {
        let mut record = self.get_or_default(key)?;

        if let Some(income) = fields.income {
            record.income = income;
        }
        if let Some(fixed) = fields.fixed_expenses {
            record.fixed_expenses = fixed;
        }
        if let Some(variable) = fields.variable_expenses {
            record.variable_expenses = variable;
        }
        if let Some(liquid) = fields.liquid_funds {
            record.liquid_funds = liquid;
        }
        record.touch();

        self.validate(&record)?;
        self.storage.months.upsert(record.clone())?;
        self.storage.months.save()?;

        Ok(record)
    }

    /// Set the backward-compat single-scalar SIP amount
    pub fn set_legacy_sip(&self, key: MonthKey, amount: Money) -> FinboardResult<MonthRecord> {
        if amount.is_negative() {
            return Err(FinboardError::Validation(
                "SIP amount cannot be negative".into(),
            ));
        }

        let mut record = self.get_or_default(key)?;
        record.legacy_sip = amount;
        record.touch();

        self.storage.months.upsert(record.clone())?;
        self.storage.months.save()?;

        Ok(record)
    }

    /// Add a named SIP contribution to a month
    pub fn add_sip(
        &self,
        key: MonthKey,
        name: impl Into<String>,
        amount: Money,
    ) -> FinboardResult<MonthRecord> {
        if amount.is_negative() {
            return Err(FinboardError::Validation(
                "SIP amount cannot be negative".into(),
            ));
        }

        let mut record = self.get_or_default(key)?;
        record.sip_entries.push(SipEntry::new(name, amount));
        record.touch();

        self.storage.months.upsert(record.clone())?;
        self.storage.months.save()?;

        Ok(record)
    }

    /// Add an ad-hoc expense line, bumping the variable-expense aggregate
    ///
    /// The aggregate stays authoritative: the engine never recomputes it
    /// from the lines, so every mutation path must keep the two in step.
    pub fn add_expense(
        &self,
        key: MonthKey,
        desc: impl Into<String>,
        amount: Money,
    ) -> FinboardResult<MonthRecord> {
        if amount.is_negative() {
            return Err(FinboardError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        let mut record = self.get_or_default(key)?;
        record.expense_lines.push(ExpenseLine::new(desc, amount));
        record.variable_expenses += amount;
        record.touch();

        self.storage.months.upsert(record.clone())?;
        self.storage.months.save()?;

        Ok(record)
    }

    /// Remove an expense line, decrementing the variable-expense aggregate
    pub fn remove_expense(&self, key: MonthKey, expense_id: ExpenseId) -> FinboardResult<MonthRecord> {
        let mut record = self.get(key)?;

        let position = record
            .expense_lines
            .iter()
            .position(|line| line.id == expense_id)
            .ok_or_else(|| FinboardError::NotFound {
                entity_type: "Expense line",
                identifier: expense_id.to_string(),
            })?;

        let removed = record.expense_lines.remove(position);
        record.variable_expenses -= removed.amount;
        record.touch();

        self.storage.months.upsert(record.clone())?;
        self.storage.months.save()?;

        Ok(record)
    }

    /// Delete a month record entirely
    pub fn delete(&self, key: MonthKey) -> FinboardResult<()> {
        if !self.storage.months.delete(key)? {
            return Err(FinboardError::month_not_found(key.to_string()));
        }
        self.storage.months.save()?;
        Ok(())
    }

    fn validate(&self, record: &MonthRecord) -> FinboardResult<()> {
        for (label, amount) in [
            ("income", record.income),
            ("fixed expenses", record.fixed_expenses),
            ("variable expenses", record.variable_expenses),
            ("liquid funds", record.liquid_funds),
        ] {
            if amount.is_negative() {
                return Err(FinboardError::Month(format!(
                    "{} cannot be negative",
                    label
                )));
            }
        }
        Ok(())
    }
}
