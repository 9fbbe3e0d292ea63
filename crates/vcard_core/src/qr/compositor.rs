//! Centered logo compositing over QR images.
//!
//! # Responsibility
//! - Scale the brand logo to the largest size the error-correction budget
//!   allows and center it exactly on the module grid.
//! - Keep compositing pure; asset loading is a separate fallible step so
//!   callers can degrade gracefully.
//!
//! # Invariants
//! - The scaled logo's larger dimension is exactly `floor(min(W,H) / 5)`.
//! - Offsets are `((W - logo_w) / 2, (H - logo_h) / 2)`, integer division,
//!   keeping module damage symmetric around the center.
//! - The input QR image is never mutated in place.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// The logo's larger dimension is 1/5 of the QR side. Chosen empirically in
/// the source system: smaller is unrecognizable, larger exceeds the ~30%
/// recovery budget of high error correction.
pub const LOGO_FRACTION_DIVISOR: u32 = 5;

/// Logo asset failure, recovered locally by the generation pipeline.
#[derive(Debug)]
pub struct LogoError {
    source: image::ImageError,
}

impl Display for LogoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "logo asset could not be loaded: {}", self.source)
    }
}

impl Error for LogoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Loads and decodes the logo asset as RGBA.
///
/// # Errors
/// Returns [`LogoError`] when the file is missing or not a decodable image.
/// Callers must treat this as a degrade signal, not a generation failure.
pub fn load_logo(path: &Path) -> Result<RgbaImage, LogoError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| LogoError { source })
}

/// Computes the scaled logo dimensions for a QR image of `qr_width` x
/// `qr_height`, preserving the logo's aspect ratio.
pub fn scaled_dimensions(
    qr_width: u32,
    qr_height: u32,
    logo_width: u32,
    logo_height: u32,
) -> (u32, u32) {
    let target = qr_width.min(qr_height) / LOGO_FRACTION_DIVISOR;
    // Widened intermediates: the product can exceed u32 for very large
    // logos, and the quotient is always <= target.
    let scale = |numerator: u32, denominator: u32| -> u32 {
        let scaled = u64::from(numerator) * u64::from(target) / u64::from(denominator.max(1));
        (scaled as u32).max(1)
    };
    if logo_width >= logo_height {
        (target, scale(logo_height, logo_width))
    } else {
        (scale(logo_width, logo_height), target)
    }
}

/// Computes the exact centering offset for a scaled logo.
pub fn centered_offset(
    qr_width: u32,
    qr_height: u32,
    logo_width: u32,
    logo_height: u32,
) -> (i64, i64) {
    (
        i64::from((qr_width - logo_width) / 2),
        i64::from((qr_height - logo_height) / 2),
    )
}

/// Returns a copy of `qr` with `logo` scaled and alpha-composited at the
/// exact center.
///
/// The logo is first pasted onto a same-size transparent canvas and the
/// canvas is then composited over the QR image. Pasting the logo directly
/// onto the grid would blend partially transparent logo edges against the
/// opaque modules incorrectly.
pub fn overlay(qr: &RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let (scaled_w, scaled_h) =
        scaled_dimensions(qr.width(), qr.height(), logo.width(), logo.height());
    let scaled = imageops::resize(logo, scaled_w, scaled_h, FilterType::Lanczos3);

    let mut canvas = RgbaImage::new(qr.width(), qr.height());
    let (offset_x, offset_y) = centered_offset(qr.width(), qr.height(), scaled_w, scaled_h);
    imageops::overlay(&mut canvas, &scaled, offset_x, offset_y);

    let mut composite = qr.clone();
    imageops::overlay(&mut composite, &canvas, 0, 0);
    composite
}

#[cfg(test)]
mod tests {
    use super::{centered_offset, scaled_dimensions};

    #[test]
    fn square_logo_scales_to_one_fifth_of_side() {
        assert_eq!(scaled_dimensions(410, 410, 200, 200), (82, 82));
    }

    #[test]
    fn wide_logo_keeps_aspect_ratio() {
        let (w, h) = scaled_dimensions(500, 500, 400, 100);
        assert_eq!(w, 100);
        assert_eq!(h, 25);
    }

    #[test]
    fn tall_logo_keeps_aspect_ratio() {
        let (w, h) = scaled_dimensions(500, 500, 100, 400);
        assert_eq!(w, 25);
        assert_eq!(h, 100);
    }

    #[test]
    fn huge_logo_dimensions_do_not_overflow() {
        let (w, h) = scaled_dimensions(4000, 4000, 4_100_000_000, 4_000_000_000);
        assert_eq!(w, 800);
        assert_eq!(h, 780);
    }

    #[test]
    fn degenerate_logo_never_collapses_to_zero() {
        let (w, h) = scaled_dimensions(500, 500, 1000, 1);
        assert_eq!(w, 100);
        assert_eq!(h, 1);
    }

    #[test]
    fn offsets_use_integer_division() {
        assert_eq!(centered_offset(410, 410, 82, 82), (164, 164));
        assert_eq!(centered_offset(411, 411, 82, 82), (164, 164));
    }
}
