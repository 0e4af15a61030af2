//! Subtext color derivation
//!
//! Produces the muted companion color used for secondary text (the caption
//! or host line under a preview title), tonally related to the card
//! background the way iOS link previews do it: darker than a light
//! background, lighter than a dark one. The shift happens on HSL lightness
//! with hue and saturation held fixed, superseding an earlier flat
//! per-channel offset that drifted hue on saturated backgrounds.

use crate::color::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::color::Rgb;
use crate::polarity::TextPolarity;

/// Derive the muted secondary text color for a background.
///
/// With black primary text (light background) the lightness halves; with
/// white primary text (dark background) it moves halfway toward 1.0. Hue
/// and saturation are untouched, and achromatic backgrounds stay
/// achromatic through the HSL round-trip.
///
/// # Example
/// ```
/// use og_color::{derive_subtext_color, Rgb, TextPolarity};
///
/// let caption = derive_subtext_color(Rgb::new(200, 200, 200), TextPolarity::Black);
/// assert_eq!(caption, Rgb::new(100, 100, 100));
/// ```
pub fn derive_subtext_color(background: Rgb, primary: TextPolarity) -> Rgb {
    let mut hsl = rgb_to_hsl(background);

    hsl.l = match primary {
        TextPolarity::Black => hsl.l * 0.5,
        TextPolarity::White => (hsl.l + (1.0 - hsl.l) * 0.5).min(1.0),
    };

    hsl_to_rgb(hsl)
}
