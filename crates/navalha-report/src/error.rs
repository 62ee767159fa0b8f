//! # Report Error Types

use thiserror::Error;

use navalha_core::ValidationError;
use navalha_db::DbError;

/// Errors produced while assembling or exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A repository read failed.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The requested report parameters were invalid (e.g. month 13).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing the XLSX workbook failed.
    #[error("workbook write failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
