//! HSL conversion helpers
//!
//! Cylindrical form of sRGB used by the subtext deriver so lightness can
//! move while hue and saturation stay put. Crate-private: HSL values never
//! leave the deriver.
//!
//! Hue is stored as a fraction of a turn in `[0, 1)` rather than degrees;
//! the sextant math below works in sixths of a turn either way.

use super::rgb::Rgb;

/// A color in HSL. `h` in `[0, 1)` (fraction of a turn), `s` and `l` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Convert an 8-bit sRGB color to HSL.
pub(crate) fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_f32();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, pinned to 0
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    // Guard against f32 noise pushing the fraction to exactly 1.0
    if h >= 1.0 {
        h -= 1.0;
    }

    Hsl { h, s, l }
}

/// Convert an HSL color back to 8-bit sRGB, rounding each channel.
///
/// When `s` is 0 the result is exactly `l` on all three channels; no hue
/// artifacts are introduced for achromatic inputs.
pub(crate) fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        return Rgb::from_f32(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    Rgb::from_f32(r, g, b)
}

/// One channel of the HSL-to-RGB sextant interpolation.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
