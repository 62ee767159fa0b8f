//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with a case-insensitive name filter on listing
//! - Deletion gated on the absence of referencing sales

use chrono::Utc;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use navalha_core::Product;

const PRODUCT_COLUMNS: &str = "id, name, purchase_price_cents, sale_price_cents, \
     quantity_on_hand, created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: MySqlPool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, purchase_price_cents, sale_price_cents,
                quantity_on_hand, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.purchase_price_cents)
        .bind(product.sale_price_cents)
        .bind(product.quantity_on_hand)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Lists products, optionally filtered by a case-insensitive substring
    /// match on the name, ordered by name.
    pub async fn list(&self, name_filter: Option<&str>) -> DbResult<Vec<Product>> {
        debug!(filter = ?name_filter, "Listing products");

        let products = match name_filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(filter) => {
                let pattern = format!("%{}%", filter);
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE LOWER(name) LIKE LOWER(?) ORDER BY name"
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Updates an existing product: full overwrite of name, prices, and
    /// quantity.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?,
                purchase_price_cents = ?,
                sale_price_cents = ?,
                quantity_on_hand = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.purchase_price_cents)
        .bind(product.sale_price_cents)
        .bind(product.quantity_on_hand)
        .bind(now)
        .bind(&product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        Ok(())
    }

    /// Deletes a product, but only if no sale references it.
    ///
    /// The dependent count and the delete run in one transaction; a blocked
    /// delete leaves everything untouched and reports how many sales are in
    /// the way.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let mut tx = self.pool.begin().await?;

        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales WHERE product_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if dependents > 0 {
            return Err(DbError::HasDependents {
                entity: "Product".to_string(),
                id: id.to_string(),
                dependents,
            });
        }

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Counts registered products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
