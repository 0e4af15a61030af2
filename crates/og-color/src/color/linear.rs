//! Linear RGB and WCAG luminance/contrast math
//!
//! sRGB's gamma curve makes arithmetic on encoded channels physically
//! wrong; relative luminance is defined over gamma-decoded intensities
//! (IEC 61966-2-1, WCAG 2.1 §dfn-relative-luminance). This module stays
//! crate-private: linear values are an intermediate for the polarity
//! decision and are never handed across a component boundary.

use super::rgb::Rgb;

/// A color in linear RGB, gamma-decoded light intensities in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Decode one sRGB channel to linear intensity.
///
/// The exact piecewise IEC 61966-2-1 transfer function. The engine decodes
/// three channels per request, not per-pixel loops, so the formula is
/// evaluated directly rather than through a lookup table.
#[inline]
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_f32();
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
        }
    }
}

impl LinearRgb {
    /// WCAG relative luminance: `0.2126 R + 0.7152 G + 0.0722 B`.
    #[inline]
    pub fn relative_luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// WCAG contrast ratio between two relative luminances.
///
/// Order-insensitive; ranges from 1.0 (identical) to 21.0 (black on white).
#[inline]
pub(crate) fn contrast_ratio(l1: f32, l2: f32) -> f32 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
