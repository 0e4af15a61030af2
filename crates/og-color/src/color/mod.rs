//! Color types and conversion utilities
//!
//! [`Rgb`] is the crate's public currency: 8-bit sRGB triples, the form
//! image decoders produce and CSS consumes. The linear-RGB and HSL
//! intermediates live in private submodules; they exist only inside the
//! luminance evaluator and the subtext deriver respectively and never
//! cross a component boundary.

pub(crate) mod hsl;
pub(crate) mod linear;
mod rgb;

pub use rgb::{ParseColorError, Rgb};
