//! Core domain logic for the vCard contact registry.
//! This crate is the single source of truth for business invariants.

pub mod context;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod qr;
pub mod repo;
pub mod service;
pub mod vcard;

pub use context::{AppConfig, AppContext};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactValidationError, NewContact};
pub use qr::encoder::{ErrorCorrection, QrOptions};
pub use qr::QrError;
pub use repo::contact_repo::{
    ContactListQuery, ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::{ContactService, ServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
