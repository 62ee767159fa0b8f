//! # Monthly XLSX Export
//!
//! Writes the monthly report as a two-sheet workbook: a per-product breakdown
//! ("Produtos Vendidos") and the grand totals ("Totais"). The artifact name
//! is deterministic: `relatorio_mensal_<MM>_<YYYY>.xlsx`.

use rust_xlsxwriter::Workbook;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ReportError;
use navalha_core::report::MonthlyReport;

/// MIME type the artifact is served with.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A downloadable report artifact on disk.
#[derive(Debug, Clone, Serialize)]
pub struct ReportArtifact {
    pub path: PathBuf,
    pub mime: &'static str,
}

/// Deterministic artifact name for a month: `relatorio_mensal_08_2026.xlsx`.
pub fn monthly_artifact_filename(month: u32, year: i32) -> String {
    format!("relatorio_mensal_{:02}_{}.xlsx", month, year)
}

/// Writes the monthly workbook into `out_dir` and returns the artifact.
pub fn write_monthly_workbook(
    report: &MonthlyReport,
    out_dir: &Path,
) -> Result<ReportArtifact, ReportError> {
    let mut workbook = Workbook::new();

    let products = workbook.add_worksheet();
    products.set_name("Produtos Vendidos")?;

    products.write_string(0, 0, "Produto")?;
    products.write_string(0, 1, "Quantidade Vendida")?;
    products.write_string(0, 2, "Total Líquido")?;
    products.write_string(0, 3, "Total Bruto")?;

    for (i, line) in report.products.iter().enumerate() {
        let row = (i + 1) as u32;
        products.write_string(row, 0, line.name.as_str())?;
        products.write_number(row, 1, line.units_sold as f64)?;
        products.write_number(row, 2, line.net_revenue.to_major_units())?;
        products.write_number(row, 3, line.gross_margin.to_major_units())?;
    }

    let totals = workbook.add_worksheet();
    totals.set_name("Totais")?;

    totals.write_string(0, 0, "Total de Vendas")?;
    totals.write_string(0, 1, "Total de Saídas")?;
    totals.write_string(0, 2, "Total Geral de Caixa (vendas - saidas)")?;
    totals.write_string(0, 3, "Lucro")?;

    totals.write_number(1, 0, report.total_net_revenue.to_major_units())?;
    totals.write_number(1, 1, report.total_outflows.to_major_units())?;
    totals.write_number(1, 2, report.cash_total.to_major_units())?;
    totals.write_number(1, 3, report.profit.to_major_units())?;

    let path = out_dir.join(monthly_artifact_filename(report.month, report.year));
    workbook.save(&path)?;

    info!(path = %path.display(), "Monthly workbook written");

    Ok(ReportArtifact {
        path,
        mime: XLSX_MIME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use navalha_core::report::{monthly_report, MonthlySaleRow};
    use navalha_core::{Money, Product};

    #[test]
    fn artifact_filename_is_zero_padded() {
        assert_eq!(
            monthly_artifact_filename(2, 2024),
            "relatorio_mensal_02_2024.xlsx"
        );
        assert_eq!(
            monthly_artifact_filename(11, 2026),
            "relatorio_mensal_11_2026.xlsx"
        );
    }

    #[test]
    fn workbook_is_written_with_deterministic_name() {
        let product = Product::new(
            "Shampoo",
            Money::from_cents(2_000),
            Money::from_cents(5_000),
            10,
        );
        let sales = vec![MonthlySaleRow {
            product_id: product.id.clone(),
            quantity: 2,
            discount: Money::from_cents(500),
        }];
        let report =
            monthly_report(2024, 2, &[product], &sales, Money::from_cents(1_000)).unwrap();

        let out_dir = std::env::temp_dir().join(format!(
            "navalha-report-test-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&out_dir).unwrap();

        let artifact = write_monthly_workbook(&report, &out_dir).unwrap();

        assert_eq!(
            artifact.path.file_name().unwrap().to_str().unwrap(),
            "relatorio_mensal_02_2024.xlsx"
        );
        assert_eq!(artifact.mime, XLSX_MIME);
        assert!(artifact.path.is_file());
        assert!(std::fs::metadata(&artifact.path).unwrap().len() > 0);

        std::fs::remove_dir_all(&out_dir).unwrap();
    }
}
