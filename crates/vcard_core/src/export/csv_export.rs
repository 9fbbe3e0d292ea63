//! CSV serialization of contact records.
//!
//! # Responsibility
//! - Produce an RFC-4180 CSV document covering every exported field.
//!
//! # Invariants
//! - The header row is stable; new columns are only appended.
//! - Row order follows the input slice (repository order: id ascending).

use super::ExportError;
use crate::model::contact::Contact;

const CSV_HEADER: &[&str] = &[
    "id",
    "name",
    "dob",
    "email",
    "phone",
    "address",
    "title",
    "organization",
    "gender",
    "photo",
    "qr_image",
];

/// Serializes `contacts` into CSV bytes with a header row.
pub fn contacts_to_csv(contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for contact in contacts {
        writer.write_record([
            contact.id.to_string(),
            contact.name.clone(),
            contact.dob.clone(),
            contact.email.clone(),
            contact.phone.clone(),
            contact.address.clone(),
            contact.title.clone().unwrap_or_default(),
            contact.organization.clone().unwrap_or_default(),
            contact.gender.clone().unwrap_or_default(),
            contact.photo.clone().unwrap_or_default(),
            contact.qr_image.clone().unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}
