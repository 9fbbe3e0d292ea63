//! vCard 3.0 text rendering.
//!
//! # Responsibility
//! - Render one contact record as a vCard 3.0 text card.
//! - Escape property values per RFC 6350 text-value rules.
//!
//! # Invariants
//! - Lines are CRLF-terminated, including the final `END:VCARD`.
//! - Optional properties are omitted entirely when the field is absent.

use crate::model::contact::Contact;

/// Renders `contact` as a vCard 3.0 document.
///
/// `card_url` is the record's public card link, emitted as the `URL`
/// property (the same payload the QR artifact encodes).
pub fn render(contact: &Contact, card_url: &str) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape_value(&contact.name)),
        format!("N:{};;;;", escape_value(&contact.name)),
        format!("BDAY:{}", escape_value(&contact.dob)),
        format!("EMAIL;TYPE=INTERNET:{}", escape_value(&contact.email)),
        format!("TEL;TYPE=CELL:{}", escape_value(&contact.phone)),
        format!("ADR;TYPE=HOME:;;{};;;;", escape_value(&contact.address)),
    ];

    if let Some(title) = contact.title.as_deref() {
        lines.push(format!("TITLE:{}", escape_value(title)));
    }
    if let Some(organization) = contact.organization.as_deref() {
        lines.push(format!("ORG:{}", escape_value(organization)));
    }
    if let Some(gender) = contact.gender.as_deref() {
        lines.push(format!("GENDER:{}", escape_value(gender)));
    }
    if let Some(photo) = contact.photo.as_deref() {
        lines.push(format!("PHOTO;VALUE=URI:{}", escape_value(photo)));
    }

    lines.push(format!("URL:{}", escape_value(card_url)));
    lines.push("END:VCARD".to_string());

    let mut card = lines.join("\r\n");
    card.push_str("\r\n");
    card
}

// Backslash first, or it would re-escape the escapes.
fn escape_value(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('\n', r"\n")
        .replace('\r', "")
        .replace(';', r"\;")
        .replace(',', r"\,")
}
