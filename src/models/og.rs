//! Open Graph data and derived preview colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::color_service::PreviewPalette;

/// Open Graph metadata scraped from a page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OgData {
    /// Page title (og:title, twitter:title, or the title element)
    pub title: String,
    /// Description text, if the page provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preview image URL, resolved to absolute form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Site name (og:site_name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Open Graph object type (og:type), e.g. "website" or "article"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    /// The page URL the metadata was scraped from (after redirects)
    pub url: String,
}

/// Colors computed by the adaptive color engine for one preview
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreviewColors {
    /// Raw dominant color sampled from the image, as CSS rgb()
    pub dominant: String,
    /// Tone-normalized background color, as CSS rgb()
    pub background: String,
    /// Primary text polarity: "black" or "white"
    pub text: String,
    /// Muted secondary text color, as CSS rgb()
    pub subtext: String,
    /// True when the image was missing or undecodable and the neutral
    /// fallback color was used instead
    pub fallback: bool,
}

impl From<&PreviewPalette> for PreviewColors {
    fn from(palette: &PreviewPalette) -> Self {
        Self {
            dominant: palette.dominant.to_css(),
            background: palette.background.to_css(),
            text: palette.text.to_string(),
            subtext: palette.subtext.to_css(),
            fallback: palette.fallback,
        }
    }
}

/// A messaging platform whose preview style can be mocked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Messages,
    Whatsapp,
    Instagram,
}

impl Platform {
    /// The mockup template file for this platform.
    pub fn template_name(self) -> &'static str {
        match self {
            Platform::Messages => "messages.html",
            Platform::Whatsapp => "whatsapp.html",
            Platform::Instagram => "instagram.html",
        }
    }

    pub const ALL: [Platform; 3] = [Platform::Messages, Platform::Whatsapp, Platform::Instagram];
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "messages" | "imessage" => Ok(Platform::Messages),
            "whatsapp" => Ok(Platform::Whatsapp),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Messages => "messages",
            Platform::Whatsapp => "whatsapp",
            Platform::Instagram => "instagram",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("messages".parse::<Platform>(), Ok(Platform::Messages));
        assert_eq!("iMessage".parse::<Platform>(), Ok(Platform::Messages));
        assert_eq!("WhatsApp".parse::<Platform>(), Ok(Platform::Whatsapp));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_template_names() {
        for p in Platform::ALL {
            assert!(p.template_name().ends_with(".html"));
        }
    }

    #[test]
    fn test_og_data_serialization_skips_empty() {
        let data = OgData {
            title: "A title".to_string(),
            description: None,
            image: None,
            site_name: None,
            og_type: None,
            url: "https://example.com".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["title"], "A title");
        assert!(json.get("description").is_none());
        assert!(json.get("image").is_none());
    }
}
