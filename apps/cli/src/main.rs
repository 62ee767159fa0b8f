//! # Navalha POS CLI
//!
//! Command-line front-end for the shop: products, sales, outflows, reports,
//! and database backup/restore. Each invocation performs exactly one
//! operation against the store and exits; a failed operation prints its
//! cause and exits non-zero, leaving the store rolled back and usable.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use navalha_db::{Database, DbConfig};

#[derive(Parser)]
#[command(
    name = "navalha",
    about = "Point-of-sale and inventory management for a small shop",
    version
)]
struct Cli {
    /// Render command output as pretty JSON when available
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the product catalog
    #[command(subcommand)]
    Product(commands::product::ProductCommands),

    /// Record and list sales
    #[command(subcommand)]
    Sale(commands::sale::SaleCommands),

    /// Record and list cash outflows
    #[command(subcommand)]
    Outflow(commands::outflow::OutflowCommands),

    /// Daily and monthly reports
    #[command(subcommand)]
    Report(commands::report::ReportCommands),

    /// Database backup and restore
    #[command(subcommand)]
    Backup(commands::backup::BackupCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        // The backup adapter works on the raw connection URL and never
        // touches the pool.
        Commands::Backup(cmd) => commands::backup::handle(&config, cmd, cli.json).await,
        Commands::Product(cmd) => {
            let db = connect(&config).await?;
            commands::product::handle(&db, cmd, cli.json).await
        }
        Commands::Sale(cmd) => {
            let db = connect(&config).await?;
            commands::sale::handle(&db, cmd, cli.json).await
        }
        Commands::Outflow(cmd) => {
            let db = connect(&config).await?;
            commands::outflow::handle(&db, cmd, cli.json).await
        }
        Commands::Report(cmd) => {
            let db = connect(&config).await?;
            commands::report::handle(&db, cmd, cli.json).await
        }
    }
}

/// Opens the pool and applies pending migrations.
async fn connect(config: &AppConfig) -> Result<Database> {
    Database::new(DbConfig::new(&config.database_url))
        .await
        .context("failed to open the database")
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navalha=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
