//! Application configuration and startup context.
//!
//! # Responsibility
//! - Hold all runtime configuration in one explicit struct.
//! - Act as the factory for migrated record-store connections.
//!
//! # Invariants
//! - There is no process-wide mutable application state; callers construct
//!   one context at startup and pass it down.
//! - Connections handed out by the context always have migrations applied.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::qr::encoder::QrOptions;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the contact registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file path.
    pub db_path: PathBuf,
    /// Directory receiving generated QR artifacts.
    pub media_dir: PathBuf,
    /// Public base URL card links are built from.
    pub base_url: String,
    /// Brand logo overlaid on generated QR images; `None` skips compositing.
    pub logo_path: Option<PathBuf>,
    #[serde(default)]
    pub qr: QrOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("vcard.db"),
            media_dir: PathBuf::from("media"),
            base_url: "http://localhost:8080".to_string(),
            logo_path: None,
            qr: QrOptions::default(),
        }
    }
}

/// Startup context owning configuration and the record-store factory.
pub struct AppContext {
    config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Opens a migrated connection to the configured record store.
    pub fn open_store(&self) -> DbResult<Connection> {
        open_db(&self.config.db_path)
    }

    /// Opens a migrated throwaway in-memory store; intended for tests and
    /// tooling that must not touch the real database file.
    pub fn open_store_in_memory(&self) -> DbResult<Connection> {
        open_db_in_memory()
    }
}
