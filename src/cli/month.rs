//! Month CLI commands
//!
//! Implements CLI commands for monthly financial records.

use clap::Subcommand;

use crate::display::{format_month_details, format_month_list};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{ExpenseId, Money, MonthKey};
use crate::services::{MonthFields, MonthService};
use crate::storage::Storage;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Create or update a month record
    Set {
        /// Month key (e.g., "2024-01")
        month: String,
        /// Income for the month (e.g., "2500" or "2500.00")
        #[arg(short, long)]
        income: Option<String>,
        /// Fixed expenses
        #[arg(short, long)]
        fixed: Option<String>,
        /// Variable expenses
        #[arg(short, long)]
        variable: Option<String>,
        /// Liquid-fund investments
        #[arg(short, long)]
        liquid: Option<String>,
    },

    /// List all month records
    List,

    /// Show a single month in detail
    Show {
        /// Month key (e.g., "2024-01")
        month: String,
    },

    /// Add a named SIP contribution to a month
    Sip {
        /// Month key (e.g., "2024-01")
        month: String,
        /// Contribution name (e.g., "Index Fund")
        name: String,
        /// Amount
        amount: String,
    },

    /// Set the general (unnamed) SIP amount for a month
    GeneralSip {
        /// Month key (e.g., "2024-01")
        month: String,
        /// Amount
        amount: String,
    },

    /// Add an ad-hoc expense line to a month
    Expense {
        /// Month key (e.g., "2024-01")
        month: String,
        /// Description
        desc: String,
        /// Amount
        amount: String,
    },

    /// Remove an expense line from a month
    RemoveExpense {
        /// Month key (e.g., "2024-01")
        month: String,
        /// Expense line id (e.g., "exp-1a2b3c4d" or a full UUID)
        id: String,
    },

    /// Delete a month record entirely
    Delete {
        /// Month key (e.g., "2024-01")
        month: String,
    },
}

/// Handle a month command
pub fn handle_month_command(storage: &Storage, cmd: MonthCommands) -> FinboardResult<()> {
    let service = MonthService::new(storage);

    match cmd {
        MonthCommands::Set {
            month,
            income,
            fixed,
            variable,
            liquid,
        } => {
            let key = parse_month(&month)?;
            let fields = MonthFields {
                income: parse_optional_amount(income)?,
                fixed_expenses: parse_optional_amount(fixed)?,
                variable_expenses: parse_optional_amount(variable)?,
                liquid_funds: parse_optional_amount(liquid)?,
            };

            let record = service.set_month(key, fields)?;
            println!("Updated {}:", record.key);
            println!("{}", format_month_details(&record));
        }

        MonthCommands::List => {
            let records = service.list()?;
            if records.is_empty() {
                println!("No month records yet.");
                println!("Add one with: finboard month set 2024-01 --income 2500");
                return Ok(());
            }
            println!("{}", format_month_list(&records));
        }

        MonthCommands::Show { month } => {
            let key = parse_month(&month)?;
            let record = service.get(key)?;
            println!("{}", format_month_details(&record));
        }

        MonthCommands::Sip {
            month,
            name,
            amount,
        } => {
            let key = parse_month(&month)?;
            let amount = parse_amount(&amount)?;
            let record = service.add_sip(key, name.as_str(), amount)?;
            println!(
                "Added SIP '{}' ({}) to {}. Month SIP total: {}",
                name,
                amount,
                key,
                record.total_sip()
            );
        }

        MonthCommands::GeneralSip { month, amount } => {
            let key = parse_month(&month)?;
            let amount = parse_amount(&amount)?;
            service.set_legacy_sip(key, amount)?;
            println!("Set general SIP for {} to {}", key, amount);
        }

        MonthCommands::Expense {
            month,
            desc,
            amount,
        } => {
            let key = parse_month(&month)?;
            let amount = parse_amount(&amount)?;
            let record = service.add_expense(key, desc.as_str(), amount)?;
            println!(
                "Added expense '{}' ({}) to {}. Variable total: {}",
                desc, amount, key, record.variable_expenses
            );
        }

        MonthCommands::RemoveExpense { month, id } => {
            let key = parse_month(&month)?;
            let expense_id: ExpenseId = id
                .parse()
                .map_err(|_| FinboardError::Validation(format!("Invalid expense id: {}", id)))?;
            let record = service.remove_expense(key, expense_id)?;
            println!(
                "Removed expense from {}. Variable total: {}",
                key, record.variable_expenses
            );
        }

        MonthCommands::Delete { month } => {
            let key = parse_month(&month)?;
            service.delete(key)?;
            println!("Deleted month record {}", key);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM month key from CLI input
pub fn parse_month(s: &str) -> FinboardResult<MonthKey> {
    s.parse()
        .map_err(|e: crate::models::month::MonthKeyParseError| {
            FinboardError::Validation(e.to_string())
        })
}

/// Parse a money amount from CLI input
pub fn parse_amount(s: &str) -> FinboardResult<Money> {
    Money::parse(s).map_err(|e| FinboardError::Validation(e.to_string()))
}

fn parse_optional_amount(s: Option<String>) -> FinboardResult<Option<Money>> {
    s.map(|v| parse_amount(&v)).transpose()
}
