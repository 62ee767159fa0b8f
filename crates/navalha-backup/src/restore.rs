//! # Database Restore
//!
//! Stages a caller-supplied SQL dump at a fixed local path and feeds it to
//! the `mysql` client. Destructive on success and irreversible; there is no
//! pre-restore backup here, so the front-end must confirm before calling.

use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::BackupError;
use crate::url::DbUrl;

/// Fixed staging filename the dump is written to before restoration.
pub const RESTORE_STAGE_FILE: &str = "restore_backup.sql";

/// Argument list for the `mysql` client, long-flag form with a
/// `source` command pointing at the staged dump.
fn mysql_args(url: &DbUrl, stage: &Path) -> Vec<String> {
    vec![
        format!("--host={}", url.host),
        format!("--user={}", url.user),
        format!("--password={}", url.password),
        format!("--port={}", url.port),
        url.database.clone(),
        format!("--execute=source {}", stage.display()),
    ]
}

/// Restores the database from a SQL dump payload.
///
/// The payload is written to [`RESTORE_STAGE_FILE`] inside `work_dir`, then
/// executed by the `mysql` client against the configured connection. Success
/// is gated on exit code 0; a non-zero exit surfaces stderr verbatim and the
/// target may be partially written (the dump's own transaction boundaries
/// are all the protection there is).
pub async fn restore(url: &DbUrl, dump: &[u8], work_dir: &Path) -> Result<(), BackupError> {
    let stage = work_dir.join(RESTORE_STAGE_FILE);
    tokio::fs::write(&stage, dump).await?;

    debug!(stage = %stage.display(), bytes = dump.len(), "Staged restore payload");

    let output = Command::new("mysql")
        .args(mysql_args(url, &stage))
        .output()
        .await?;

    if !output.status.success() {
        return Err(BackupError::tool_failure("mysql", &output.stderr));
    }

    info!(database = %url.database, "Restore complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_args_source_the_staged_file() {
        let url = DbUrl {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "root".to_string(),
            database: "navalha".to_string(),
        };

        let args = mysql_args(&url, Path::new("restore_backup.sql"));
        assert_eq!(
            args,
            vec![
                "--host=localhost",
                "--user=root",
                "--password=root",
                "--port=3306",
                "navalha",
                "--execute=source restore_backup.sql",
            ]
        );
    }
}
