//! Text polarity decision
//!
//! Decides whether black or white primary text reads better against a
//! background color, using WCAG contrast ratios computed from gamma-decoded
//! luminance. This supersedes an earlier midpoint heuristic (encoded
//! brightness above 128 means black text) which misjudges mid grays: sRGB
//! gray 120 decodes to linear luminance ~0.19, where black text wins by
//! contrast even though the heuristic picks white.

use std::fmt;

use crate::color::linear::{contrast_ratio, LinearRgb};
use crate::color::Rgb;

/// The primary text color chosen against a background: black or white.
///
/// A binary value rather than a full color because preview consumers only
/// ever set their font color to one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPolarity {
    Black,
    White,
}

impl TextPolarity {
    /// The CSS keyword for this polarity.
    pub fn as_str(self) -> &'static str {
        match self {
            TextPolarity::Black => "black",
            TextPolarity::White => "white",
        }
    }

    /// The polarity as a concrete color.
    pub fn color(self) -> Rgb {
        match self {
            TextPolarity::Black => Rgb::new(0, 0, 0),
            TextPolarity::White => Rgb::new(255, 255, 255),
        }
    }
}

impl fmt::Display for TextPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choose the text polarity with the higher WCAG contrast ratio against
/// the given background. Ties favor black.
///
/// Pure and deterministic; no rounding happens before the final binary
/// decision.
///
/// # Example
/// ```
/// use og_color::{choose_text_polarity, Rgb, TextPolarity};
///
/// assert_eq!(choose_text_polarity(Rgb::new(255, 255, 255)), TextPolarity::Black);
/// assert_eq!(choose_text_polarity(Rgb::new(0, 0, 0)), TextPolarity::White);
/// ```
pub fn choose_text_polarity(background: Rgb) -> TextPolarity {
    let luminance = LinearRgb::from(background).relative_luminance();

    // Black text: contrast against luminance 0; white text: against 1.0
    let vs_black = contrast_ratio(luminance, 0.0);
    let vs_white = contrast_ratio(1.0, luminance);

    if vs_black >= vs_white {
        TextPolarity::Black
    } else {
        TextPolarity::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(
            choose_text_polarity(Rgb::new(255, 255, 255)),
            TextPolarity::Black
        );
        assert_eq!(choose_text_polarity(Rgb::new(0, 0, 0)), TextPolarity::White);
    }

    #[test]
    fn test_saturated_colors() {
        // Pure green is bright (luminance ~0.715): black text
        assert_eq!(
            choose_text_polarity(Rgb::new(0, 255, 0)),
            TextPolarity::Black
        );
        // Pure blue is dark (luminance ~0.072): white text
        assert_eq!(
            choose_text_polarity(Rgb::new(0, 0, 255)),
            TextPolarity::White
        );
        // Pure red (~0.213): black contrast 5.25 beats white contrast 3.99
        assert_eq!(
            choose_text_polarity(Rgb::new(255, 0, 0)),
            TextPolarity::Black
        );
    }

    #[test]
    fn test_polarity_strings() {
        assert_eq!(TextPolarity::Black.as_str(), "black");
        assert_eq!(TextPolarity::White.to_string(), "white");
        assert_eq!(TextPolarity::White.color(), Rgb::new(255, 255, 255));
    }
}
