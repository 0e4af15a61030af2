//! Adaptive color pipeline composition.
//!
//! Wires the og-color engine's four operations into the order the previews
//! need: the text polarity is decided on the raw sampled color, the
//! normalized tone becomes the card background, and the subtext derives
//! from that background plus the polarity.

use og_color::{
    choose_text_polarity, derive_subtext_color, normalize_tone, sample_dominant_color,
    DecodeError, Rgb, TextPolarity,
};

/// The full set of colors computed for one preview.
#[derive(Debug, Clone, Copy)]
pub struct PreviewPalette {
    /// Raw dominant color sampled from the image
    pub dominant: Rgb,
    /// Tone-normalized card background
    pub background: Rgb,
    /// Primary text polarity against the raw dominant
    pub text: TextPolarity,
    /// Muted secondary text color
    pub subtext: Rgb,
    /// True when the neutral fallback stood in for a missing/bad image
    pub fallback: bool,
}

/// Runs the color engine and supplies the configured fallback
pub struct ColorService {
    fallback: Rgb,
}

impl ColorService {
    pub fn new(fallback: Rgb) -> Self {
        Self { fallback }
    }

    /// Compute the preview palette from encoded image bytes.
    pub fn palette_from_bytes(&self, bytes: &[u8]) -> Result<PreviewPalette, DecodeError> {
        let dominant = sample_dominant_color(bytes)?;
        Ok(run_pipeline(dominant, false))
    }

    /// The palette used when no image is available or decoding failed.
    pub fn fallback_palette(&self) -> PreviewPalette {
        run_pipeline(self.fallback, true)
    }
}

fn run_pipeline(dominant: Rgb, fallback: bool) -> PreviewPalette {
    let text = choose_text_polarity(dominant);
    let background = normalize_tone(dominant);
    let subtext = derive_subtext_color(background, text);

    PreviewPalette {
        dominant,
        background,
        text,
        subtext,
        fallback,
    }
}
