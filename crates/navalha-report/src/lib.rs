//! # navalha-report: Reporting Engine for Navalha POS
//!
//! Builds the daily register report and the monthly financial report from
//! read-only repository queries, and exports the monthly report as a
//! two-sheet XLSX artifact.
//!
//! ## Data Flow
//! ```text
//! Database ──(read-only queries)──► ReportService
//!                                       │
//!                    ┌──────────────────┴──────────────────┐
//!                    ▼                                     ▼
//!     navalha_core::report::daily_report()   navalha_core::report::monthly_report()
//!                    │                                     │
//!                    ▼                                     ▼
//!               DailyReport                        MonthlyReport ──► XLSX
//! ```
//!
//! This crate never writes to the store.

pub mod error;
pub mod export;

pub use error::ReportError;
pub use export::{monthly_artifact_filename, ReportArtifact, XLSX_MIME};

use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

use navalha_core::report::{
    self, DailyReport, MonthlySaleRow, MonthlyReport, OutflowLine, SaleFact,
};
use navalha_core::Money;
use navalha_db::Database;

/// Read-only reporting facade over the database.
#[derive(Debug, Clone)]
pub struct ReportService {
    db: Database,
}

impl ReportService {
    /// Creates a new ReportService.
    pub fn new(db: Database) -> Self {
        ReportService { db }
    }

    /// Builds the daily report for one register day.
    pub async fn daily(&self, date: NaiveDate) -> Result<DailyReport, ReportError> {
        let facts: Vec<SaleFact> = self
            .db
            .sales()
            .daily_facts(date)
            .await?
            .into_iter()
            .map(|row| SaleFact {
                product_name: row.product_name,
                unit_sale_price: Money::from_cents(row.sale_price_cents),
                quantity: row.quantity,
                discount: Money::from_cents(row.discount_cents),
                payment_method: row.payment_method,
            })
            .collect();

        let outflows: Vec<OutflowLine> = self
            .db
            .outflows()
            .list_for_date(date)
            .await?
            .into_iter()
            .map(|o| OutflowLine {
                description: o.description,
                amount: Money::from_cents(o.amount_cents),
            })
            .collect();

        info!(%date, sales = facts.len(), outflows = outflows.len(), "Daily report built");

        Ok(report::daily_report(date, &facts, &outflows))
    }

    /// Builds the monthly report for (year, month).
    ///
    /// Covers every registered product, sold or not, over the inclusive
    /// month range.
    pub async fn monthly(&self, year: i32, month: u32) -> Result<MonthlyReport, ReportError> {
        let (start, end) = report::month_range(year, month)?;

        let products = self.db.products().list(None).await?;

        let sales: Vec<MonthlySaleRow> = self
            .db
            .sales()
            .rows_between(start, end)
            .await?
            .into_iter()
            .map(|row| MonthlySaleRow {
                product_id: row.product_id,
                quantity: row.quantity,
                discount: Money::from_cents(row.discount_cents),
            })
            .collect();

        let total_outflows =
            Money::from_cents(self.db.outflows().total_between(start, end).await?);

        info!(year, month, products = products.len(), sales = sales.len(), "Monthly report built");

        Ok(report::monthly_report(
            year,
            month,
            &products,
            &sales,
            total_outflows,
        )?)
    }

    /// Builds the monthly report and writes the XLSX artifact into `out_dir`.
    pub async fn monthly_with_export(
        &self,
        year: i32,
        month: u32,
        out_dir: &Path,
    ) -> Result<(MonthlyReport, ReportArtifact), ReportError> {
        let report = self.monthly(year, month).await?;
        let artifact = export::write_monthly_workbook(&report, out_dir)?;
        Ok((report, artifact))
    }
}
