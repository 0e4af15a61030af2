//! Tone normalization
//!
//! Raw dominant colors sampled from photographs are frequently near-white
//! or near-black, which leaves preview chrome looking washed out. This
//! step pulls extreme brightness toward a usable middle range and slightly
//! desaturates, so the card background has enough tonal body.
//!
//! The brightness classification uses the weighted sum of *gamma-encoded*
//! channels, not the gamma-decoded WCAG luminance the polarity decision
//! uses. The mismatch is deliberate, inherited source behavior: switching
//! the proxy to linearized luminance would reclassify mid grays (sRGB 128
//! reads ~0.50 encoded but ~0.22 linear) and change visual output.

use crate::color::Rgb;

/// Encoded luminance above this is "very bright" and gets dimmed.
const BRIGHT_CUTOFF: f32 = 0.75;
/// Encoded luminance below this is "very dark" and gets boosted.
const DARK_CUTOFF: f32 = 0.25;
/// Brightness multiplier applied to very bright colors.
const DIM_FACTOR: f32 = 0.8;
/// Brightness multiplier applied to very dark colors.
const BOOST_FACTOR: f32 = 1.2;
/// Saturation retained when either brightness adjustment fires.
const DESATURATE: f32 = 0.9;

/// Pull an extreme background color toward a usable mid-tone.
///
/// Very bright colors are dimmed (factor 0.8), very dark colors boosted
/// (factor 1.2), and both are desaturated toward their channel mean
/// (factor 0.9). Colors already in the middle range pass through
/// unchanged, so the operation is the identity for mid-luminance inputs.
///
/// # Example
/// ```
/// use og_color::{normalize_tone, Rgb};
///
/// // Pure white dims to gray; desaturation is a no-op on achromatic input
/// assert_eq!(normalize_tone(Rgb::new(255, 255, 255)), Rgb::new(204, 204, 204));
///
/// // Mid-range colors are fixed points
/// assert_eq!(normalize_tone(Rgb::new(100, 150, 200)), Rgb::new(100, 150, 200));
/// ```
pub fn normalize_tone(color: Rgb) -> Rgb {
    let [mut r, mut g, mut b] = color.to_f32();

    // Brightness proxy over encoded channels (see module docs)
    let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;

    let (brightness, saturation) = if y > BRIGHT_CUTOFF {
        (DIM_FACTOR, DESATURATE)
    } else if y < DARK_CUTOFF {
        (BOOST_FACTOR, DESATURATE)
    } else {
        (1.0, 1.0)
    };

    r = (r * brightness).clamp(0.0, 1.0);
    g = (g * brightness).clamp(0.0, 1.0);
    b = (b * brightness).clamp(0.0, 1.0);

    // Blend each channel toward the mean; factor < 1 desaturates toward gray
    let mean = (r + g + b) / 3.0;
    r = mean + (r - mean) * saturation;
    g = mean + (g - mean) * saturation;
    b = mean + (b - mean) * saturation;

    Rgb::from_f32(r, g, b)
}
