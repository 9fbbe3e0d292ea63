//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record backing card rendering and export.
//! - Validate field contents before any write reaches storage.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `email` is unique; uniqueness is enforced by the store, format here.
//! - `dob` is ISO `YYYY-MM-DD` text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a contact record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = i64;

static DOB_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("dob pattern is valid"));

// Pragmatic shape check only; deliverability is not this layer's problem.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Validation failure for contact field contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField(&'static str),
    /// Date of birth does not match `YYYY-MM-DD`.
    InvalidDob(String),
    /// Email does not look like an address.
    InvalidEmail(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidDob(value) => {
                write!(f, "date of birth `{value}` is not in YYYY-MM-DD format")
            }
            Self::InvalidEmail(value) => write!(f, "email `{value}` is not a valid address"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned stable id; embedded in the card URL and QR artifact name.
    pub id: ContactId,
    pub name: String,
    /// ISO `YYYY-MM-DD`.
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Stored photo reference (file name), when one was uploaded.
    pub photo: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    /// Free-text gender marker, matching the source schema.
    pub gender: Option<String>,
    /// Generated QR artifact reference (file name), once generation ran.
    pub qr_image: Option<String>,
}

impl Contact {
    /// Checks field-level invariants shared with [`NewContact`].
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.dob, &self.email, &self.phone, &self.address)
    }
}

/// Write-side input for registering a contact.
///
/// Optional fields default to `None`; the original system read them from a
/// dynamic form map with silent fallbacks, which this shape makes explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    /// ISO `YYYY-MM-DD`.
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Photo reference; default `None` (no photo).
    #[serde(default)]
    pub photo: Option<String>,
    /// Job title; default `None`.
    #[serde(default)]
    pub title: Option<String>,
    /// Organization name; default `None`.
    #[serde(default)]
    pub organization: Option<String>,
    /// Gender marker; default `None`.
    #[serde(default)]
    pub gender: Option<String>,
}

impl NewContact {
    /// Creates an input with all optional fields unset.
    pub fn new(
        name: impl Into<String>,
        dob: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            photo: None,
            title: None,
            organization: None,
            gender: None,
        }
    }

    /// Checks field-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.dob, &self.email, &self.phone, &self.address)
    }
}

fn validate_fields(
    name: &str,
    dob: &str,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<(), ContactValidationError> {
    for (field, value) in [
        ("name", name),
        ("dob", dob),
        ("email", email),
        ("phone", phone),
        ("address", address),
    ] {
        if value.trim().is_empty() {
            return Err(ContactValidationError::EmptyField(field));
        }
    }

    if !DOB_PATTERN.is_match(dob) {
        return Err(ContactValidationError::InvalidDob(dob.to_string()));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ContactValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
