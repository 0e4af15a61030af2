use og_color::Rgb;
use serde::Deserialize;

use crate::assets::AssetLoader;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Timeout for outbound page and image fetches, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Largest preview image the server will download, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// User-Agent sent when scraping pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Background used when a page has no usable image (hex)
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,

    /// Text truncation applied in mockup templates
    #[serde(default)]
    pub truncate: TruncateConfig,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_user_agent() -> String {
    format!("ogview/{}", env!("CARGO_PKG_VERSION"))
}

fn default_fallback_color() -> String {
    "#808080".to_string()
}

/// Truncation lengths for mockup text
#[derive(Debug, Deserialize, Clone)]
pub struct TruncateConfig {
    #[serde(default = "default_title_len")]
    pub title: usize,
    #[serde(default = "default_description_len")]
    pub description: usize,
}

fn default_title_len() -> usize {
    70
}

fn default_description_len() -> usize {
    200
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            title: default_title_len(),
            description: default_description_len(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        listen = %config.listen,
                        fallback = %config.fallback_color,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The fallback background as a parsed color.
    ///
    /// An unparseable hex value falls back to neutral gray rather than
    /// failing startup.
    pub fn fallback_rgb(&self) -> Rgb {
        self.fallback_color.parse().unwrap_or_else(|e| {
            tracing::warn!(
                value = %self.fallback_color,
                error = %e,
                "Invalid fallback_color in config, using neutral gray"
            );
            Rgb::new(128, 128, 128)
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            fetch_timeout_secs: default_fetch_timeout(),
            max_image_bytes: default_max_image_bytes(),
            user_agent: default_user_agent(),
            fallback_color: default_fallback_color(),
            truncate: TruncateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.listen, "0.0.0.0:3000");
        assert_eq!(config.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.truncate.title, 70);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = "listen: \"127.0.0.1:9999\"\ntruncate:\n  title: 40\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listen, "127.0.0.1:9999");
        assert_eq!(config.truncate.title, 40);
        // Unspecified keys keep defaults
        assert_eq!(config.truncate.description, 200);
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_fallback_rgb_parses_hex() {
        let config = AppConfig {
            fallback_color: "#336699".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.fallback_rgb(), Rgb::new(51, 102, 153));
    }

    #[test]
    fn test_fallback_rgb_recovers_from_garbage() {
        let config = AppConfig {
            fallback_color: "not-a-color".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.fallback_rgb(), Rgb::new(128, 128, 128));
    }
}
