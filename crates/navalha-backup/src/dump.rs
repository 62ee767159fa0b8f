//! # Database Backup
//!
//! Runs `mysqldump` against the configured connection and writes its stdout
//! to a timestamp-named artifact.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::BackupError;
use crate::url::DbUrl;

/// MIME type the dump artifact is served with.
pub const SQL_MIME: &str = "application/sql";

/// A downloadable database dump on disk.
#[derive(Debug, Clone, Serialize)]
pub struct BackupArtifact {
    pub path: PathBuf,
    pub mime: &'static str,
}

/// Timestamp-named artifact: `backup_20260804_153000.sql`.
pub fn backup_filename(at: DateTime<Local>) -> String {
    format!("backup_{}.sql", at.format("%Y%m%d_%H%M%S"))
}

/// Argument list for `mysqldump`, mirroring its short-flag form.
fn mysqldump_args(url: &DbUrl) -> Vec<String> {
    vec![
        format!("-h{}", url.host),
        format!("-u{}", url.user),
        format!("-p{}", url.password),
        format!("-P{}", url.port),
        url.database.clone(),
    ]
}

/// Dumps the whole database into `out_dir`.
///
/// Blocks until `mysqldump` exits; success is gated on exit code 0, and a
/// non-zero exit surfaces the tool's stderr verbatim. The dump itself is not
/// inspected.
pub async fn backup(url: &DbUrl, out_dir: &Path) -> Result<BackupArtifact, BackupError> {
    debug!(host = %url.host, database = %url.database, "Running mysqldump");

    let output = Command::new("mysqldump")
        .args(mysqldump_args(url))
        .output()
        .await?;

    if !output.status.success() {
        return Err(BackupError::tool_failure("mysqldump", &output.stderr));
    }

    let path = out_dir.join(backup_filename(Local::now()));
    tokio::fs::write(&path, &output.stdout).await?;

    info!(path = %path.display(), bytes = output.stdout.len(), "Backup written");

    Ok(BackupArtifact {
        path,
        mime: SQL_MIME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_carries_the_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 8, 4, 15, 30, 0).unwrap();
        assert_eq!(backup_filename(at), "backup_20260804_153000.sql");
    }

    #[test]
    fn dump_args_mirror_the_url() {
        let url = DbUrl {
            host: "db.local".to_string(),
            port: 3307,
            user: "shop".to_string(),
            password: "secret".to_string(),
            database: "navalha".to_string(),
        };

        assert_eq!(
            mysqldump_args(&url),
            vec!["-hdb.local", "-ushop", "-psecret", "-P3307", "navalha"]
        );
    }
}
