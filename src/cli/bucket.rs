//! Bucket CLI commands
//!
//! Implements CLI commands for savings bucket management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_bucket_list, format_withdrawal_history};
use crate::error::{FinboardError, FinboardResult};
use crate::services::BucketService;
use crate::storage::Storage;

use super::month::parse_amount;

/// Bucket subcommands
#[derive(Subcommand)]
pub enum BucketCommands {
    /// Create a bucket at the end of the waterfall
    Add {
        /// Bucket name
        name: String,
        /// Target amount (e.g., "5000" or "5000.00")
        target: String,
        /// Advisory deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// List all buckets in waterfall order
    List,

    /// Show a bucket's withdrawal history
    Show {
        /// Bucket name or id
        bucket: String,
    },

    /// Withdraw money from a bucket
    Withdraw {
        /// Bucket name or id
        bucket: String,
        /// Amount
        amount: String,
        /// Note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Withdrawal date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Move a bucket to a position in the waterfall (1 = funded first)
    Reorder {
        /// Bucket name or id
        bucket: String,
        /// New 1-based position
        position: usize,
    },

    /// Change a bucket's target amount
    Target {
        /// Bucket name or id
        bucket: String,
        /// New target amount
        amount: String,
    },

    /// Rename a bucket
    Rename {
        /// Bucket name or id
        bucket: String,
        /// New name
        new_name: String,
    },

    /// Set or clear a bucket's advisory deadline
    Deadline {
        /// Bucket name or id
        bucket: String,
        /// Deadline (YYYY-MM-DD)
        date: Option<String>,
        /// Clear the deadline
        #[arg(short, long)]
        clear: bool,
    },

    /// Mark a bucket as completed
    Complete {
        /// Bucket name or id
        bucket: String,
    },

    /// Reactivate a completed bucket
    Reopen {
        /// Bucket name or id
        bucket: String,
    },

    /// Delete a bucket
    Delete {
        /// Bucket name or id
        bucket: String,
    },
}

/// Handle a bucket command
pub fn handle_bucket_command(storage: &Storage, cmd: BucketCommands) -> FinboardResult<()> {
    let service = BucketService::new(storage);

    match cmd {
        BucketCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let bucket = service.create(&name, target)?;

            let bucket = if let Some(date) = deadline {
                service.set_deadline(bucket.id, Some(parse_date(&date)?))?
            } else {
                bucket
            };

            println!(
                "Created bucket '{}' at priority {} with target {}",
                bucket.name, bucket.priority, bucket.target
            );
        }

        BucketCommands::List => {
            let buckets = service.list()?;
            if buckets.is_empty() {
                println!("No buckets yet.");
                println!("Add one with: finboard bucket add \"Emergency Fund\" 5000");
                return Ok(());
            }
            println!("{}", format_bucket_list(&buckets));
        }

        BucketCommands::Show { bucket } => {
            let bucket = service.resolve(&bucket)?;
            println!("{}", format_withdrawal_history(&bucket));
        }

        BucketCommands::Withdraw {
            bucket,
            amount,
            note,
            date,
        } => {
            let target = service.resolve(&bucket)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let bucket = service.withdraw(target.id, amount, &note, date)?;
            println!(
                "Withdrew {} from '{}'. Total withdrawn: {}",
                amount,
                bucket.name,
                bucket.total_withdrawn()
            );
        }

        BucketCommands::Reorder { bucket, position } => {
            let target = service.resolve(&bucket)?;
            let buckets = service.reorder(target.id, position)?;
            println!("New waterfall order:");
            println!("{}", format_bucket_list(&buckets));
        }

        BucketCommands::Target { bucket, amount } => {
            let target = service.resolve(&bucket)?;
            let amount = parse_amount(&amount)?;
            let bucket = service.set_target(target.id, amount)?;
            println!("Set target of '{}' to {}", bucket.name, bucket.target);
        }

        BucketCommands::Rename { bucket, new_name } => {
            let target = service.resolve(&bucket)?;
            let bucket = service.rename(target.id, &new_name)?;
            println!("Renamed bucket to '{}'", bucket.name);
        }

        BucketCommands::Deadline {
            bucket,
            date,
            clear,
        } => {
            let target = service.resolve(&bucket)?;
            let deadline = if clear {
                None
            } else {
                match date {
                    Some(d) => Some(parse_date(&d)?),
                    None => {
                        return Err(FinboardError::Validation(
                            "Provide a date or use --clear".into(),
                        ))
                    }
                }
            };

            let bucket = service.set_deadline(target.id, deadline)?;
            match bucket.deadline {
                Some(d) => println!("Set deadline of '{}' to {}", bucket.name, d),
                None => println!("Cleared deadline of '{}'", bucket.name),
            }
        }

        BucketCommands::Complete { bucket } => {
            let target = service.resolve(&bucket)?;
            let bucket = service.complete(target.id)?;
            println!("Marked '{}' as completed", bucket.name);
        }

        BucketCommands::Reopen { bucket } => {
            let target = service.resolve(&bucket)?;
            let bucket = service.reopen(target.id)?;
            println!("Reopened '{}'", bucket.name);
        }

        BucketCommands::Delete { bucket } => {
            let target = service.resolve(&bucket)?;
            let name = target.name.clone();
            service.delete(target.id)?;
            println!("Deleted bucket '{}'", name);
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> FinboardResult<NaiveDate> {
    s.parse()
        .map_err(|_| FinboardError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}
