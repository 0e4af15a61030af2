//! 8-bit sRGB color type
//!
//! The only color representation that crosses the crate boundary. Values
//! are integers in 0..=255 per channel, no alpha.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color in 8-bit sRGB, the form consumed by CSS and produced by decoders.
///
/// All engine operations accept and return this type. Float math happens
/// internally; results are clamped to `[0, 1]` and rounded back to `u8`
/// before they reach a caller.
///
/// # Example
/// ```
/// use og_color::Rgb;
/// let c = Rgb::new(200, 100, 50);
/// assert_eq!(c.to_css(), "rgb(200, 100, 50)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from normalized float channels.
    ///
    /// Each channel is clamped to `[0, 1]` and rounded to the nearest
    /// 8-bit value. Clamping is the recovery policy for out-of-range
    /// intermediate math; nothing here panics.
    ///
    /// # Example
    /// ```
    /// use og_color::Rgb;
    /// assert_eq!(Rgb::from_f32(1.5, 0.5, -0.2), Rgb::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Normalized float channels in `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Format as a CSS `rgb(r, g, b)` triple.
    #[inline]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error parsing a color from a hex string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("hex color must be 3 or 6 digits")]
    InvalidLength,

    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] std::num::ParseIntError),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB`, and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use og_color::Rgb;
    ///
    /// let gray: Rgb = "#808080".parse().unwrap();
    /// assert_eq!(gray, Rgb::new(128, 128, 128));
    ///
    /// let red: Rgb = "F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f32_rounds_and_clamps() {
        assert_eq!(Rgb::from_f32(0.0, 0.5, 1.0), Rgb::new(0, 128, 255));
        assert_eq!(Rgb::from_f32(-1.0, 2.0, 0.999), Rgb::new(0, 255, 255));
        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(Rgb::from_f32(0.5, 0.5, 0.5).r, 128);
    }

    #[test]
    fn test_f32_round_trip_exact() {
        for v in [0u8, 1, 50, 127, 128, 200, 254, 255] {
            let c = Rgb::new(v, v, v);
            let [r, g, b] = c.to_f32();
            assert_eq!(Rgb::from_f32(r, g, b), c);
        }
    }

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(204, 204, 204).to_css(), "rgb(204, 204, 204)");
        assert_eq!(Rgb::new(0, 0, 0).to_css(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_parse_hex_full() {
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("808080".parse::<Rgb>().unwrap(), Rgb::new(128, 128, 128));
        assert_eq!("  #1a2b3c ".parse::<Rgb>().unwrap(), Rgb::new(26, 43, 60));
    }

    #[test]
    fn test_parse_hex_shorthand() {
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("#f08".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 136));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(
            "#ffff".parse::<Rgb>().unwrap_err(),
            ParseColorError::InvalidLength
        );
        assert!(matches!(
            "#zzzzzz".parse::<Rgb>().unwrap_err(),
            ParseColorError::InvalidDigit(_)
        ));
    }
}
