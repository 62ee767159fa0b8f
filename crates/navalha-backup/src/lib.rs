//! # navalha-backup: Backup/Restore Adapter for Navalha POS
//!
//! Shells out to the external MySQL tools to dump and restore the whole
//! database. Operates independently of the persistence layer, sharing only
//! the connection URL.
//!
//! ## Flow
//! ```text
//! backup:   mysqldump -h… -u… -p… -P… <db>  ─► backup_<YYYYMMDD_HHMMSS>.sql
//! restore:  payload ─► restore_backup.sql ─► mysql … --execute=source …
//! ```
//!
//! Both calls block until the child exits (no timeout) and gate success
//! purely on the exit code, passing stderr through on failure. Restore is
//! destructive and has no pre-restore safeguard; the front-end is expected
//! to demand explicit confirmation.

pub mod dump;
pub mod error;
pub mod restore;
pub mod url;

pub use dump::{backup, backup_filename, BackupArtifact, SQL_MIME};
pub use error::BackupError;
pub use restore::{restore, RESTORE_STAGE_FILE};
pub use url::DbUrl;
