//! # Product Commands
//!
//! Catalog management: add, list (with a case-insensitive name filter),
//! full-overwrite update, and delete (blocked while sales reference the
//! product).

use anyhow::Result;
use clap::{Args, Subcommand};
use std::str::FromStr;
use tracing::debug;

use super::{money_cell, print_json};
use navalha_core::{validation, Money, Product};
use navalha_db::{Database, DbError};

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Register a new product
    Add(AddArgs),
    /// List products, optionally filtered by name
    List(ListArgs),
    /// Overwrite a product's name, prices, and quantity
    Update(UpdateArgs),
    /// Delete a product (fails while sales reference it)
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// What the shop pays per unit, e.g. 10.50
    #[arg(long, value_parser = Money::from_str)]
    purchase_price: Money,

    /// What the customer pays per unit, e.g. 25.00
    #[arg(long, value_parser = Money::from_str)]
    sale_price: Money,

    /// Initial stock level
    #[arg(long)]
    quantity: i64,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive substring filter on the name
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Product id
    id: String,

    #[arg(long)]
    name: String,

    #[arg(long, value_parser = Money::from_str)]
    purchase_price: Money,

    #[arg(long, value_parser = Money::from_str)]
    sale_price: Money,

    #[arg(long)]
    quantity: i64,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Product id
    id: String,
}

pub async fn handle(db: &Database, cmd: ProductCommands, json: bool) -> Result<()> {
    match cmd {
        ProductCommands::Add(args) => {
            validate_fields(&args.name, args.purchase_price, args.sale_price, args.quantity)?;

            let product = Product::new(
                args.name.trim(),
                args.purchase_price,
                args.sale_price,
                args.quantity,
            );
            let product = db.products().insert(&product).await?;

            if json {
                print_json(&product)?;
            } else {
                println!(
                    "Product {} added: {} ({} in stock)",
                    product.id, product.name, product.quantity_on_hand
                );
            }
        }

        ProductCommands::List(args) => {
            let products = db.products().list(args.name.as_deref()).await?;
            debug!(count = products.len(), "Products listed");

            if json {
                print_json(&products)?;
            } else if products.is_empty() {
                println!("No products found.");
            } else {
                println!(
                    "{:<36}  {:<30} {:>12} {:>12} {:>6}",
                    "ID", "NAME", "PURCHASE", "SALE", "STOCK"
                );
                for p in &products {
                    println!(
                        "{:<36}  {:<30} {} {} {:>6}",
                        p.id,
                        p.name,
                        money_cell(p.purchase_price()),
                        money_cell(p.sale_price()),
                        p.quantity_on_hand
                    );
                }
            }
        }

        ProductCommands::Update(args) => {
            validate_fields(&args.name, args.purchase_price, args.sale_price, args.quantity)?;

            let mut product = db
                .products()
                .get_by_id(&args.id)
                .await?
                .ok_or_else(|| DbError::not_found("Product", &args.id))?;

            product.name = args.name.trim().to_string();
            product.purchase_price_cents = args.purchase_price.cents();
            product.sale_price_cents = args.sale_price.cents();
            product.quantity_on_hand = args.quantity;
            db.products().update(&product).await?;

            if json {
                print_json(&product)?;
            } else {
                println!("Product {} updated.", product.id);
            }
        }

        ProductCommands::Delete(args) => {
            db.products().delete(&args.id).await?;
            println!("Product {} deleted.", args.id);
        }
    }

    Ok(())
}

fn validate_fields(
    name: &str,
    purchase_price: Money,
    sale_price: Money,
    quantity: i64,
) -> Result<()> {
    validation::validate_product_name(name)?;
    validation::validate_non_negative("purchase price", purchase_price)?;
    validation::validate_non_negative("sale price", sale_price)?;
    validation::validate_stock_quantity(quantity)?;
    Ok(())
}
