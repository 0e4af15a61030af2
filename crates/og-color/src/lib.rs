//! og-color: adaptive color engine for link preview mockups
//!
//! Given an arbitrary source image, this crate computes a representative
//! background color and derives accessible, aesthetically adjusted text and
//! subtext colors from it. It is the color brain behind Open Graph preview
//! mockups: the preview card's tinted chrome, its black-or-white title text,
//! and the muted caption line are all produced here.
//!
//! # Pipeline
//!
//! ```text
//! image bytes
//!     |
//!     v
//! sample_dominant_color      (decode, box-average to one pixel)
//!     |
//!     +---> choose_text_polarity   (WCAG contrast vs. black and white)
//!     |
//!     v
//! normalize_tone             (pull near-white/near-black toward mid-tones)
//!     |
//!     v
//! derive_subtext_color       (HSL lightness shift toward the polarity)
//! ```
//!
//! The polarity decision runs on the *raw* sample; tone normalization feeds
//! the UI background and the subtext derivation. Every step is a pure
//! function over value types, safe to call concurrently and in any order.
//!
//! # Example
//!
//! ```
//! use og_color::{choose_text_polarity, derive_subtext_color, normalize_tone};
//! use og_color::{Rgb, TextPolarity};
//!
//! let dominant = Rgb::new(255, 255, 255);
//! assert_eq!(choose_text_polarity(dominant), TextPolarity::Black);
//!
//! let background = normalize_tone(dominant);
//! assert_eq!(background, Rgb::new(204, 204, 204));
//!
//! let caption = derive_subtext_color(background, TextPolarity::Black);
//! assert_eq!(caption, Rgb::new(102, 102, 102));
//! ```
//!
//! # Color spaces
//!
//! Three representations, each confined to one stage:
//!
//! - [`Rgb`]: 8-bit sRGB, the only type that crosses the crate boundary.
//! - Linear RGB: gamma-decoded intensities, used internally by the WCAG
//!   luminance and contrast math in [`choose_text_polarity`].
//! - HSL: cylindrical form used internally by [`derive_subtext_color`] so
//!   lightness can shift while hue and saturation hold still.
//!
//! Note that [`normalize_tone`] deliberately uses a gamma-encoded weighted
//! luminance proxy rather than the linearized WCAG luminance; see its
//! module documentation.

pub mod color;
pub mod polarity;
pub mod sample;
pub mod subtext;
pub mod tone;


pub use color::{ParseColorError, Rgb};
pub use polarity::{choose_text_polarity, TextPolarity};
pub use sample::{sample_dominant_color, DecodeError};
pub use subtext::derive_subtext_color;
pub use tone::normalize_tone;
