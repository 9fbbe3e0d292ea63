//! Contact registry use-case service.
//!
//! # Responsibility
//! - Orchestrate the record lifecycle: register, update, remove, export.
//! - Keep QR artifacts in sync with their records (generate on create,
//!   regenerate on demand, delete on removal).
//!
//! # Invariants
//! - Every successfully registered contact has a QR artifact and a stored
//!   reference to it.
//! - Encoding failures abort the call; logo failures never do.
//! - Artifact cleanup tolerates a missing file (already-removed artifacts
//!   must not block record deletion).

use crate::context::AppConfig;
use crate::export::{contacts_to_csv, ExportError};
use crate::model::contact::{Contact, ContactId, NewContact};
use crate::qr::{generator, QrError};
use crate::repo::contact_repo::{ContactListQuery, ContactRepository, RepoError, RepoResult};
use crate::vcard;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;

/// Failure in a service-level workflow.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Qr(QrError),
    Export(ExportError),
    Io(std::io::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Qr(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Qr(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<QrError> for ServiceError {
    fn from(value: QrError) -> Self {
        Self::Qr(value)
    }
}

impl From<ExportError> for ServiceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Use-case service wrapper for contact registry operations.
pub struct ContactService<'cfg, R: ContactRepository> {
    repo: R,
    config: &'cfg AppConfig,
}

impl<'cfg, R: ContactRepository> ContactService<'cfg, R> {
    /// Creates a service over the provided repository and configuration.
    pub fn new(repo: R, config: &'cfg AppConfig) -> Self {
        Self { repo, config }
    }

    /// Registers a new contact and generates its QR artifact.
    ///
    /// # Contract
    /// - Persists the record first; the assigned id feeds the card URL.
    /// - Writes the artifact reference back onto the record.
    /// - Returns the stored record including the artifact reference.
    pub fn register(&self, input: &NewContact) -> Result<Contact, ServiceError> {
        let id = self.repo.create_contact(input)?;
        let file_name = generator::generate_and_store(self.config, id)?;
        self.repo.set_qr_image(id, &file_name)?;

        info!(
            "event=contact_register module=service status=ok contact_id={id} qr_image={file_name}"
        );
        self.require_contact(id)
    }

    /// Gets one contact by id.
    pub fn get(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        self.repo.get_contact(id)
    }

    /// Finds a contact by its unique email.
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Contact>> {
        self.repo.find_by_email(email)
    }

    /// Lists contacts using filter and pagination options.
    pub fn list(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>> {
        self.repo.list_contacts(query)
    }

    /// Updates an existing contact's details.
    ///
    /// The card URL only depends on the record id, so the QR artifact stays
    /// valid across detail updates.
    pub fn update_details(&self, contact: &Contact) -> Result<(), ServiceError> {
        self.repo.update_contact(contact)?;
        Ok(())
    }

    /// Removes a contact record and its QR artifact.
    pub fn remove(&self, id: ContactId) -> Result<(), ServiceError> {
        let contact = self.require_contact(id)?;
        self.repo.delete_contact(id)?;

        if let Some(file_name) = contact.qr_image.as_deref() {
            let path = self.config.media_dir.join(file_name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => {
                    warn!(
                        "event=artifact_cleanup module=service status=degraded \
                         contact_id={id} path={} error={err}",
                        path.display()
                    );
                }
            }
        }

        info!("event=contact_remove module=service status=ok contact_id={id}");
        Ok(())
    }

    /// Regenerates the QR artifact for an existing contact.
    ///
    /// Idempotent: repeated calls rewrite the same deterministic file.
    pub fn regenerate_qr(&self, id: ContactId) -> Result<String, ServiceError> {
        self.require_contact(id)?;
        let file_name = generator::generate_and_store(self.config, id)?;
        self.repo.set_qr_image(id, &file_name)?;
        Ok(file_name)
    }

    /// Renders the vCard text for a contact.
    pub fn vcard(&self, id: ContactId) -> Result<String, ServiceError> {
        let contact = self.require_contact(id)?;
        let url = generator::card_url(&self.config.base_url, id);
        Ok(vcard::render(&contact, &url))
    }

    /// Exports matching contacts as CSV bytes.
    pub fn export_csv(&self, query: &ContactListQuery) -> Result<Vec<u8>, ServiceError> {
        let contacts = self.repo.list_contacts(query)?;
        Ok(contacts_to_csv(&contacts)?)
    }

    fn require_contact(&self, id: ContactId) -> Result<Contact, ServiceError> {
        self.repo
            .get_contact(id)?
            .ok_or(ServiceError::Repo(RepoError::NotFound(id)))
    }
}
