//! # Sale Repository
//!
//! Database operations for the sales ledger.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                              │
//! │    UPDATE products                                                  │
//! │       SET quantity_on_hand = quantity_on_hand - ?                   │
//! │     WHERE id = ? AND quantity_on_hand >= ?     ← the stock guard    │
//! │                                                                     │
//! │    0 rows? → product missing or not enough stock; nothing changed   │
//! │    1 row?  → INSERT the sale row                                    │
//! │  COMMIT                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guard clause makes the decrement conditional inside the same
//! transaction as the insert, so two concurrent sales of the last unit
//! cannot both succeed and stock can never go negative.

use chrono::{NaiveDate, Utc};
use sqlx::MySqlPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use navalha_core::{Money, PaymentMethod, Sale};

const SALE_COLUMNS: &str =
    "id, product_id, quantity, discount_cents, payment_method, sale_date, created_at";

/// One sale joined with its product, for the daily report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailySaleRow {
    pub product_name: String,
    pub sale_price_cents: i64,
    pub quantity: i64,
    pub discount_cents: i64,
    pub payment_method: PaymentMethod,
}

/// One sale row in a month range, for the monthly report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthSaleRow {
    pub product_id: String,
    pub quantity: i64,
    pub discount_cents: i64,
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: MySqlPool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: MySqlPool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale, atomically decrementing the product's stock.
    ///
    /// ## Preconditions
    /// - the product exists
    /// - `quantity >= 1` (validated by the caller)
    /// - `quantity <= quantity_on_hand` (enforced here, by the guard)
    ///
    /// On a failed precondition the operation is a no-op and reports
    /// `NotFound` or `InsufficientStock` with the available count.
    pub async fn record(
        &self,
        product_id: &str,
        quantity: i64,
        discount: Money,
        payment_method: PaymentMethod,
        sale_date: NaiveDate,
    ) -> DbResult<Sale> {
        debug!(product_id = %product_id, quantity, "Recording sale");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let decremented = sqlx::query(
            r#"
            UPDATE products
               SET quantity_on_hand = quantity_on_hand - ?,
                   updated_at = ?
             WHERE id = ? AND quantity_on_hand >= ?
            "#,
        )
        .bind(quantity)
        .bind(now)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            // Distinguish a missing product from insufficient stock; the
            // transaction is dropped either way, so nothing has changed.
            let available: Option<i64> =
                sqlx::query_scalar("SELECT quantity_on_hand FROM products WHERE id = ?")
                    .bind(product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            return Err(match available {
                None => DbError::not_found("Product", product_id),
                Some(available) => DbError::InsufficientStock {
                    product_id: product_id.to_string(),
                    available,
                    requested: quantity,
                },
            });
        }

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_string(),
            quantity,
            discount_cents: discount.cents(),
            payment_method,
            sale_date,
            created_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO sales (
                id, product_id, quantity, discount_cents,
                payment_method, sale_date, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&sale.id)
        .bind(&sale.product_id)
        .bind(sale.quantity)
        .bind(sale.discount_cents)
        .bind(sale.payment_method)
        .bind(sale.sale_date)
        .bind(sale.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(sale_id = %sale.id, product_id = %product_id, quantity, "Sale recorded");

        Ok(sale)
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists sales, optionally bounded by an inclusive date range.
    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales \
             WHERE (? IS NULL OR sale_date >= ?) \
               AND (? IS NULL OR sale_date <= ?) \
             ORDER BY sale_date, created_at"
        ))
        .bind(from)
        .bind(from)
        .bind(to)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Reads the day's sales joined with their products, for the daily
    /// report.
    pub async fn daily_facts(&self, date: NaiveDate) -> DbResult<Vec<DailySaleRow>> {
        let rows = sqlx::query_as::<_, DailySaleRow>(
            r#"
            SELECT p.name AS product_name,
                   p.sale_price_cents,
                   s.quantity,
                   s.discount_cents,
                   s.payment_method
              FROM sales s
             INNER JOIN products p ON p.id = s.product_id
             WHERE s.sale_date = ?
             ORDER BY s.created_at
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Reads the sale rows in an inclusive date range, for the monthly
    /// report.
    pub async fn rows_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<MonthSaleRow>> {
        let rows = sqlx::query_as::<_, MonthSaleRow>(
            r#"
            SELECT product_id, quantity, discount_cents
              FROM sales
             WHERE sale_date BETWEEN ? AND ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
