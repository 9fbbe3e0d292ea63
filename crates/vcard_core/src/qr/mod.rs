//! QR artifact generation for contact cards.
//!
//! # Responsibility
//! - Encode card URLs into module-grid raster images.
//! - Composite the optional brand logo without breaking scannability.
//! - Persist artifacts under deterministic per-contact names.
//!
//! # Invariants
//! - High error correction is always used when a logo will be overlaid.
//! - A failing logo asset degrades to a plain QR image, never to an error.
//! - Identical inputs produce byte-identical PNG output.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod compositor;
pub mod encoder;
pub mod generator;

/// Fatal failure while producing a QR artifact.
///
/// Logo problems are deliberately absent here; see
/// [`compositor::LogoError`] and the degrade path in [`generator`].
#[derive(Debug)]
pub enum QrError {
    /// Payload exceeds symbol capacity at the chosen error-correction level.
    Encoding(qrcode::types::QrError),
    /// Raster encoding (PNG) failed.
    Image(image::ImageError),
    /// Artifact could not be written to the media directory.
    Io(std::io::Error),
}

impl Display for QrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "payload cannot be encoded: {err}"),
            Self::Image(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<qrcode::types::QrError> for QrError {
    fn from(value: qrcode::types::QrError) -> Self {
        Self::Encoding(value)
    }
}

impl From<image::ImageError> for QrError {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}

impl From<std::io::Error> for QrError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
