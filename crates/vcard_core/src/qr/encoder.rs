//! Payload-to-raster QR encoding.
//!
//! # Responsibility
//! - Encode one UTF-8 payload into a square black-on-white module grid.
//! - Apply the configured module box size and quiet-zone border.
//!
//! # Invariants
//! - Output side length is exactly `(modules + 2*border) * box_size`.
//! - Symbol version auto-sizes to the minimum that fits the payload.

use super::QrError;
use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Standard QR error-correction strengths.
///
/// [`ErrorCorrection::High`] tolerates ~30% symbol damage and is mandatory
/// whenever a logo overlay will occlude part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCorrection {
    /// ~7% recovery.
    Low,
    /// ~15% recovery.
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl ErrorCorrection {
    fn to_ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::Quartile => EcLevel::Q,
            Self::High => EcLevel::H,
        }
    }
}

/// Fixed layout parameters for rendered QR images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Pixel side length of one module box.
    pub box_size: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    pub ec_level: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 4,
            ec_level: ErrorCorrection::High,
        }
    }
}

/// Encodes `payload` into a square RGBA image.
///
/// # Errors
/// Returns [`QrError::Encoding`] when the payload exceeds the maximum
/// symbol capacity for the chosen error-correction level.
pub fn encode(payload: &str, options: &QrOptions) -> Result<RgbaImage, QrError> {
    let code = QrCode::with_error_correction_level(payload, options.ec_level.to_ec_level())?;
    let modules = code.width() as u32;
    let side = (modules + 2 * options.border) * options.box_size;

    let mut img = RgbaImage::from_pixel(side, side, LIGHT);
    for (index, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let module_x = index as u32 % modules;
        let module_y = index as u32 / modules;
        let px = (module_x + options.border) * options.box_size;
        let py = (module_y + options.border) * options.box_size;
        for dy in 0..options.box_size {
            for dx in 0..options.box_size {
                img.put_pixel(px + dx, py + dy, DARK);
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::{encode, ErrorCorrection, QrOptions};

    #[test]
    fn defaults_match_documented_layout() {
        let options = QrOptions::default();
        assert_eq!(options.box_size, 10);
        assert_eq!(options.border, 4);
        assert_eq!(options.ec_level, ErrorCorrection::High);
    }

    #[test]
    fn oversized_payload_is_an_encoding_error() {
        let payload = "x".repeat(4000);
        let err = encode(&payload, &QrOptions::default()).unwrap_err();
        assert!(matches!(err, crate::qr::QrError::Encoding(_)));
    }
}
