//! Text helpers for mockup rendering.

/// Truncate text to a maximum number of characters, appending `...` when
/// anything was cut. Operates on chars, not bytes, so multi-byte text
/// never splits mid-character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
