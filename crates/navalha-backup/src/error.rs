//! # Backup Error Types

use thiserror::Error;

/// Errors from the backup/restore adapter.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The connection URL could not be parsed into tool arguments.
    #[error("invalid database URL: {0}")]
    InvalidUrl(String),

    /// The external tool exited non-zero; stderr is passed through verbatim.
    #[error("{tool} failed: {stderr}")]
    ExternalToolFailure { tool: String, stderr: String },

    /// Spawning the tool or writing the artifact failed.
    #[error("backup I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl BackupError {
    /// Builds an ExternalToolFailure from a child's stderr bytes.
    pub(crate) fn tool_failure(tool: &str, stderr: &[u8]) -> Self {
        BackupError::ExternalToolFailure {
            tool: tool.to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}
