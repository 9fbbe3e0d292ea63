//! Card QR generation orchestration.
//!
//! # Responsibility
//! - Build the public card URL for a contact and encode it.
//! - Apply the optional logo overlay with graceful degradation.
//! - Persist PNG artifacts under deterministic per-contact names.
//!
//! # Invariants
//! - Artifact name for contact N is always `qr_N.png`.
//! - When a logo is configured, encoding is forced to high error correction
//!   regardless of the configured level.
//! - Generation is idempotent; regeneration overwrites last-writer-wins.

use super::encoder::{self, ErrorCorrection};
use super::{compositor, QrError};
use crate::context::AppConfig;
use crate::model::contact::ContactId;
use image::ImageFormat;
use log::{info, warn};
use std::fs;
use std::io::Cursor;
use std::time::Instant;

/// Builds the externally resolvable card URL embedded as the QR payload.
pub fn card_url(base_url: &str, id: ContactId) -> String {
    format!("{}/vcard/{id}", base_url.trim_end_matches('/'))
}

/// Deterministic artifact file name for a contact's QR image.
pub fn artifact_name(id: ContactId) -> String {
    format!("qr_{id}.png")
}

/// Generates the PNG bytes for a contact's card QR image.
///
/// Applies the configured logo overlay when present; a logo that cannot be
/// loaded is logged and skipped, never fatal.
///
/// # Errors
/// Returns [`QrError::Encoding`] when the card URL exceeds symbol capacity
/// and [`QrError::Image`] when PNG serialization fails.
pub fn generate_card_qr(config: &AppConfig, id: ContactId) -> Result<Vec<u8>, QrError> {
    let started_at = Instant::now();
    info!("event=qr_generate module=qr status=start contact_id={id}");

    let payload = card_url(&config.base_url, id);
    let mut options = config.qr;
    if config.logo_path.is_some() {
        // Overlay damage eats into the recovery budget; anything below the
        // ~30% level risks an unscannable card.
        options.ec_level = ErrorCorrection::High;
    }

    let plain = encoder::encode(&payload, &options)?;

    let composed = match config.logo_path.as_deref() {
        None => plain,
        Some(logo_path) => match compositor::load_logo(logo_path) {
            Ok(logo) => compositor::overlay(&plain, &logo),
            Err(err) => {
                warn!(
                    "event=logo_overlay module=qr status=degraded contact_id={id} \
                     logo_path={} error={err}",
                    logo_path.display()
                );
                plain
            }
        },
    };

    let mut cursor = Cursor::new(Vec::new());
    composed.write_to(&mut cursor, ImageFormat::Png)?;

    info!(
        "event=qr_generate module=qr status=ok contact_id={id} duration_ms={} bytes={}",
        started_at.elapsed().as_millis(),
        cursor.get_ref().len()
    );
    Ok(cursor.into_inner())
}

/// Generates and writes the artifact into the configured media directory.
///
/// Returns the stored file name for write-back onto the contact record.
pub fn generate_and_store(config: &AppConfig, id: ContactId) -> Result<String, QrError> {
    let bytes = generate_card_qr(config, id)?;

    fs::create_dir_all(&config.media_dir)?;
    let file_name = artifact_name(id);
    fs::write(config.media_dir.join(&file_name), &bytes)?;

    Ok(file_name)
}
