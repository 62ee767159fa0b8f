//! # Outflow Repository
//!
//! Database operations for cash outflows. Outflows are create-only; the rest
//! of the API is read paths for the reports.

use chrono::NaiveDate;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::DbResult;
use navalha_core::Outflow;

const OUTFLOW_COLUMNS: &str = "id, description, amount_cents, outflow_date, created_at";

/// Repository for outflow database operations.
#[derive(Debug, Clone)]
pub struct OutflowRepository {
    pool: MySqlPool,
}

impl OutflowRepository {
    /// Creates a new OutflowRepository.
    pub fn new(pool: MySqlPool) -> Self {
        OutflowRepository { pool }
    }

    /// Inserts a new outflow.
    pub async fn insert(&self, outflow: &Outflow) -> DbResult<Outflow> {
        debug!(id = %outflow.id, amount = outflow.amount_cents, "Inserting outflow");

        sqlx::query(
            r#"
            INSERT INTO outflows (
                id, description, amount_cents, outflow_date, created_at
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&outflow.id)
        .bind(&outflow.description)
        .bind(outflow.amount_cents)
        .bind(outflow.outflow_date)
        .bind(outflow.created_at)
        .execute(&self.pool)
        .await?;

        Ok(outflow.clone())
    }

    /// Lists outflows, optionally bounded by an inclusive date range.
    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DbResult<Vec<Outflow>> {
        let outflows = sqlx::query_as::<_, Outflow>(&format!(
            "SELECT {OUTFLOW_COLUMNS} FROM outflows \
             WHERE (? IS NULL OR outflow_date >= ?) \
               AND (? IS NULL OR outflow_date <= ?) \
             ORDER BY outflow_date, created_at"
        ))
        .bind(from)
        .bind(from)
        .bind(to)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(outflows)
    }

    /// Lists the outflows of a single register day.
    pub async fn list_for_date(&self, date: NaiveDate) -> DbResult<Vec<Outflow>> {
        let outflows = sqlx::query_as::<_, Outflow>(&format!(
            "SELECT {OUTFLOW_COLUMNS} FROM outflows \
             WHERE outflow_date = ? ORDER BY created_at"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(outflows)
    }

    /// Sums outflow amounts over an inclusive date range, in cents.
    pub async fn total_between(&self, start: NaiveDate, end: NaiveDate) -> DbResult<i64> {
        // CAST: MySQL widens SUM(BIGINT) to DECIMAL, which does not decode
        // into i64.
        let total: i64 = sqlx::query_scalar(
            "SELECT CAST(COALESCE(SUM(amount_cents), 0) AS SIGNED) FROM outflows \
             WHERE outflow_date BETWEEN ? AND ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
