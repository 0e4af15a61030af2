//! URL cleanup helpers for display and fetching.

/// Strip the scheme from a URL for display.
pub fn remove_protocol(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("//"))
        .unwrap_or(url)
}

/// Ensure a URL has a scheme so it can be fetched.
///
/// Bare hosts get `https://`; scheme-relative URLs get `https:`.
pub fn add_protocol(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        format!("https://{url}")
    }
}

/// Reduce a URL to its host part, the caption line shown under mockup
/// titles (e.g. `https://notion.so/about` becomes `notion.so`).
pub fn clean_url(url: &str) -> &str {
    remove_protocol(url)
        .split('/')
        .next()
        .unwrap_or_default()
}
