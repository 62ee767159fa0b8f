//! # Backup Commands
//!
//! Wraps the backup adapter. Restore overwrites the live database with no
//! way back, so it refuses to run without `--yes`.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::print_json;
use crate::config::AppConfig;
use navalha_backup::{backup, restore, DbUrl};

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Dump the whole database to backup_<YYYYMMDD_HHMMSS>.sql
    Create(CreateArgs),
    /// Restore the database from a SQL dump (destructive)
    Restore(RestoreArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Directory the dump is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
pub struct RestoreArgs {
    /// Path to the SQL dump to restore
    file: PathBuf,

    /// Confirm overwriting the current database
    #[arg(long)]
    yes: bool,
}

pub async fn handle(config: &AppConfig, cmd: BackupCommands, json: bool) -> Result<()> {
    let db_url = DbUrl::parse(&config.database_url)?;

    match cmd {
        BackupCommands::Create(args) => {
            let artifact = backup(&db_url, &args.out_dir).await?;

            if json {
                print_json(&artifact)?;
            } else {
                println!("Backup written to {}", artifact.path.display());
            }
        }

        BackupCommands::Restore(args) => {
            if !args.yes {
                bail!(
                    "restore overwrites the current database and cannot be undone; \
                     re-run with --yes to confirm"
                );
            }

            let dump = std::fs::read(&args.file)
                .with_context(|| format!("failed to read {}", args.file.display()))?;

            restore(&db_url, &dump, &std::env::current_dir()?).await?;

            println!("Restore complete.");
        }
    }

    Ok(())
}
