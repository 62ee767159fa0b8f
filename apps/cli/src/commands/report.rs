//! # Report Commands
//!
//! The daily register report prints to the terminal; the monthly report also
//! writes the two-sheet XLSX artifact.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;

use super::print_json;
use navalha_core::report::DailyReport;
use navalha_db::Database;
use navalha_report::ReportService;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Daily register report (defaults to today)
    Daily(DailyArgs),
    /// Monthly report, exported as relatorio_mensal_<MM>_<YYYY>.xlsx
    Monthly(MonthlyArgs),
}

#[derive(Args)]
pub struct DailyArgs {
    /// Register day to report on (YYYY-MM-DD)
    #[arg(long, value_parser = NaiveDate::from_str)]
    date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct MonthlyArgs {
    /// Month, 1-12
    #[arg(long)]
    month: u32,

    /// Year, e.g. 2026
    #[arg(long)]
    year: i32,

    /// Directory the XLSX artifact is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

pub async fn handle(db: &Database, cmd: ReportCommands, json: bool) -> Result<()> {
    let service = ReportService::new(db.clone());

    match cmd {
        ReportCommands::Daily(args) => {
            let date = args.date.unwrap_or_else(|| Local::now().date_naive());
            let report = service.daily(date).await?;

            if json {
                print_json(&report)?;
            } else {
                render_daily(&report);
            }
        }

        ReportCommands::Monthly(args) => {
            let (report, artifact) = service
                .monthly_with_export(args.year, args.month, &args.out_dir)
                .await?;

            if json {
                print_json(&json!({ "report": report, "artifact": artifact }))?;
            } else {
                println!(
                    "Monthly report for {:02}/{} ({} to {})",
                    report.month, report.year, report.start, report.end
                );
                println!("  Products covered: {}", report.products.len());
                println!("  Net revenue:      {}", report.total_net_revenue);
                println!("  Outflows:         {}", report.total_outflows);
                println!("  Cash total:       {}", report.cash_total);
                println!("  Profit:           {}", report.profit);
                println!("Workbook written to {}", artifact.path.display());
            }
        }
    }

    Ok(())
}

fn render_daily(report: &DailyReport) {
    println!("Daily report for {}", report.date);

    println!("\nItems sold:");
    if report.units_by_product.is_empty() {
        println!("  (no sales recorded)");
    } else {
        for (name, units) in &report.units_by_product {
            println!("  {}: {} units", name, units);
        }
    }

    if !report.gross_by_method.is_empty() {
        println!("\nSales by payment method:");
        for (method, gross) in &report.gross_by_method {
            let share = report
                .distribution
                .iter()
                .find(|s| s.method == *method)
                .map(|s| format!(" ({:.1}%)", s.percent))
                .unwrap_or_default();
            println!("  {}: {}{}", method, gross, share);
        }
    }

    println!("\nOutflows:");
    for line in &report.outflows {
        println!("  {}: {}", line.description, line.amount);
    }
    println!("  Total outflows: {}", report.total_outflows);

    println!("\nCash register closing:");
    for (method, balance) in &report.closing_balances {
        println!("  {}: {}", method, balance);
    }
}
