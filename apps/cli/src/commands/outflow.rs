//! # Outflow Commands
//!
//! Cash expenditures: create-only, dated to today's register day.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::str::FromStr;

use super::{money_cell, print_json};
use navalha_core::{validation, Money, Outflow};
use navalha_db::Database;

#[derive(Subcommand)]
pub enum OutflowCommands {
    /// Record a cash outflow dated today
    Record(RecordArgs),
    /// List outflows, optionally bounded by an inclusive date range
    List(ListArgs),
}

#[derive(Args)]
pub struct RecordArgs {
    /// What the money went to
    #[arg(long)]
    description: String,

    /// Amount, e.g. 20.00
    #[arg(long, value_parser = Money::from_str)]
    amount: Money,
}

#[derive(Args)]
pub struct ListArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long, value_parser = NaiveDate::from_str)]
    from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long, value_parser = NaiveDate::from_str)]
    to: Option<NaiveDate>,
}

pub async fn handle(db: &Database, cmd: OutflowCommands, json: bool) -> Result<()> {
    match cmd {
        OutflowCommands::Record(args) => {
            validation::validate_description(&args.description)?;
            validation::validate_non_negative("amount", args.amount)?;

            let outflow = Outflow::new(args.description.trim(), args.amount);
            let outflow = db.outflows().insert(&outflow).await?;

            if json {
                print_json(&outflow)?;
            } else {
                println!(
                    "Outflow {} recorded: {} ({})",
                    outflow.id,
                    outflow.description,
                    outflow.amount()
                );
            }
        }

        OutflowCommands::List(args) => {
            let outflows = db.outflows().list(args.from, args.to).await?;

            if json {
                print_json(&outflows)?;
            } else if outflows.is_empty() {
                println!("No outflows found.");
            } else {
                println!("{:<36}  {:<10} {:>12}  DESCRIPTION", "ID", "DATE", "AMOUNT");
                for o in &outflows {
                    println!(
                        "{:<36}  {:<10} {}  {}",
                        o.id,
                        o.outflow_date,
                        money_cell(o.amount()),
                        o.description
                    );
                }
            }
        }
    }

    Ok(())
}
