//! # Sale Commands
//!
//! Recording a sale decrements the product's stock inside the same store
//! transaction; a sale that would overdraw the stock is rejected whole.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use std::str::FromStr;

use super::{money_cell, print_json};
use navalha_core::{validation, Money, PaymentMethod};
use navalha_db::{Database, DbError};

#[derive(Subcommand)]
pub enum SaleCommands {
    /// Record a sale (decrements stock; rejected if stock is short)
    Record(RecordArgs),
    /// List sales, optionally bounded by an inclusive date range
    List(ListArgs),
}

#[derive(Args)]
pub struct RecordArgs {
    /// Product id
    #[arg(long)]
    product: String,

    /// Units sold
    #[arg(long)]
    quantity: i64,

    /// Flat discount, e.g. 5.00
    #[arg(long, default_value = "0", value_parser = Money::from_str)]
    discount: Money,

    /// Payment method: cash, credit-card, debit-card, or pix
    #[arg(long, value_parser = PaymentMethod::from_str)]
    method: PaymentMethod,
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

pub async fn handle(db: &Database, cmd: SaleCommands, json: bool) -> Result<()> {
    match cmd {
        SaleCommands::Record(args) => {
            validation::validate_sale_quantity(args.quantity)?;
            validation::validate_non_negative("discount", args.discount)?;

            // Fetched for the receipt line; the stock check itself happens
            // inside the repository's guarded transaction.
            let product = db
                .products()
                .get_by_id(&args.product)
                .await?
                .ok_or_else(|| DbError::not_found("Product", &args.product))?;

            let sale = db
                .sales()
                .record(
                    &args.product,
                    args.quantity,
                    args.discount,
                    args.method,
                    Local::now().date_naive(),
                )
                .await?;

            if json {
                print_json(&sale)?;
            } else {
                println!(
                    "Sale {} recorded: {} x {} via {}, net {}",
                    sale.id,
                    sale.quantity,
                    product.name,
                    sale.payment_method,
                    sale.net_value(product.sale_price())
                );
            }
        }

        SaleCommands::List(args) => {
            let sales = db.sales().list(args.from, args.to).await?;

            if json {
                print_json(&sales)?;
            } else if sales.is_empty() {
                println!("No sales found.");
            } else {
                println!(
                    "{:<36}  {:<10} {:>4} {:>12}  {:<11} {:<36}",
                    "ID", "DATE", "QTY", "DISCOUNT", "METHOD", "PRODUCT"
                );
                for s in &sales {
                    println!(
                        "{:<36}  {:<10} {:>4} {}  {:<11} {:<36}",
                        s.id,
                        s.sale_date,
                        s.quantity,
                        money_cell(s.discount()),
                        s.payment_method.to_string(),
                        s.product_id
                    );
                }
            }
        }
    }

    Ok(())
}
