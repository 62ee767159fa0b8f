//! # Database Migrations
//!
//! Embedded SQL migrations for Navalha POS.
//!
//! The `sqlx::migrate!()` macro embeds all SQL files from `migrations/mysql`
//! into the binary at compile time; no runtime file access is needed.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/mysql/` with the next sequence number
//!    (`NNN_description.sql`)
//! 2. Never modify existing migrations; always add new ones

use sqlx::MySqlPool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/mysql` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/mysql");

/// Runs all pending database migrations.
///
/// Safe to run multiple times: applied migrations are recorded in
/// `_sqlx_migrations` (with checksums) and skipped thereafter. Each migration
/// runs in its own transaction, in filename order.
pub async fn run_migrations(pool: &MySqlPool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied");
    Ok(())
}
