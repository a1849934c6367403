//! Monthly financial record model
//!
//! One record per calendar month, keyed by `YYYY-MM`. Holds the income and
//! expense aggregates, named investment contributions, and ad-hoc expense
//! line items for that month.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::{self, Money};

/// Calendar month key, e.g. "2024-01"
///
/// Ordering on `(year, month)` is equivalent to lexical ordering of the
/// serialized `YYYY-MM` form, so sorting records by key sorts them
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month key for the current local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The previous calendar month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a month key string fails to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyParseError(pub String);

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month key (expected YYYY-MM): {}", self.0)
    }
}

impl std::error::Error for MonthKeyParseError {}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyParseError(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthKeyParseError(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthKeyParseError(s.to_string()))?;

        Self::new(year, month).ok_or_else(|| MonthKeyParseError(s.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named investment contribution for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipEntry {
    /// Contribution name, e.g. an index fund or plan name
    #[serde(default)]
    pub name: String,

    /// Contribution amount for the month
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub amount: Money,
}

impl SipEntry {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// The name used for lifetime aggregation; blank names fall back to a
    /// shared placeholder so they still accumulate somewhere visible.
    pub fn effective_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Unnamed SIP"
        } else {
            trimmed
        }
    }
}

/// An ad-hoc variable-expense line item
///
/// Informational detail only: `MonthRecord::variable_expenses` is the
/// authoritative aggregate and is kept in sync by the month service, never
/// recomputed from these lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub id: ExpenseId,

    #[serde(default)]
    pub desc: String,

    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub amount: Money,
}

impl ExpenseLine {
    pub fn new(desc: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            desc: desc.into(),
            amount,
        }
    }
}

/// One month of financial history
///
/// All monetary fields deserialize defensively: absent, null, or otherwise
/// malformed values become zero rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Calendar month this record covers
    pub key: MonthKey,

    /// Total income for the month
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub income: Money,

    /// Fixed expenses (rent, utilities, subscriptions)
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub fixed_expenses: Money,

    /// Variable expenses aggregate (authoritative; see `ExpenseLine`)
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub variable_expenses: Money,

    /// Liquid-fund investments (parked cash moved out of the spendable pool)
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub liquid_funds: Money,

    /// Single unnamed monthly investment amount (backward-compat field)
    #[serde(default, deserialize_with = "money::coerce_or_zero")]
    pub legacy_sip: Money,

    /// Named investment contributions, in entry order
    #[serde(default)]
    pub sip_entries: Vec<SipEntry>,

    /// Ad-hoc variable-expense line items, in entry order
    #[serde(default)]
    pub expense_lines: Vec<ExpenseLine>,

    /// When this record was last modified
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl MonthRecord {
    /// Create an empty record for a month
    pub fn new(key: MonthKey) -> Self {
        Self {
            key,
            income: Money::zero(),
            fixed_expenses: Money::zero(),
            variable_expenses: Money::zero(),
            liquid_funds: Money::zero(),
            legacy_sip: Money::zero(),
            sip_entries: Vec::new(),
            expense_lines: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Total investment contributions for the month (legacy + named)
    pub fn total_sip(&self) -> Money {
        self.legacy_sip + self.sip_entries.iter().map(|e| e.amount).sum()
    }

    /// Total cash leaving the spendable pool this month
    pub fn outflow(&self) -> Money {
        self.fixed_expenses + self.variable_expenses + self.total_sip() + self.liquid_funds
    }

    /// Income minus outflow; negative when the month ran a deficit
    pub fn surplus(&self) -> Money {
        self.income - self.outflow()
    }

    /// Mark the record as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
