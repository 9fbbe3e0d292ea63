//! Record-store bootstrap for the contact registry.
//!
//! # Responsibility
//! - Hand out configured SQLite connections.
//! - Run the versioned schema migrations before any caller touches data.
//!
//! # Invariants
//! - `PRAGMA user_version` is the single source of truth for the applied
//!   schema version.
//! - A connection that failed bootstrap is never returned to callers.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-level failure during bootstrap or migration.
#[derive(Debug)]
pub enum DbError {
    /// Transport error from the SQLite driver.
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build; refusing to touch it protects
    /// the data from a downgrade.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is ahead of this build (supports up to {latest_supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
