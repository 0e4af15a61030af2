//! Asset loading with embedded fallbacks
//!
//! Mockup templates and the default config ship inside the binary. If an
//! external path is configured (via env var), the filesystem is tried
//! first and the embedded copy serves as fallback, so users can restyle
//! mockups without rebuilding.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded platform mockup templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External templates directory (from TEMPLATES_DIR env var)
    templates_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader.
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(templates_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            config_file,
        }
    }

    /// Read a mockup template by file name (e.g. `messages.html`).
    ///
    /// Tries the external directory first if configured, then embedded.
    pub fn read_template(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.templates_dir {
            let full_path = dir.join(name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading template from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedTemplates::get(name)
            .map(|f| {
                tracing::trace!(name, "Loading template from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Template not found: {name}"))
            })
    }

    /// Read a mockup template as UTF-8 text.
    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        let bytes = self.read_template(name)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the config file as a string.
    ///
    /// Uses the external file if configured and present, otherwise the
    /// embedded default.
    pub fn read_config_string(&self) -> io::Result<String> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return fs::read_to_string(path);
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| String::from_utf8_lossy(&f.data).into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config missing"))
    }

    /// Names of all embedded templates.
    pub fn list_embedded_templates() -> Vec<String> {
        EmbeddedTemplates::iter().map(|f| f.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_present() {
        let names = AssetLoader::list_embedded_templates();
        for expected in ["messages.html", "whatsapp.html", "instagram.html"] {
            assert!(
                names.iter().any(|n| n == expected),
                "missing embedded template {expected}, have {names:?}"
            );
        }
    }

    #[test]
    fn test_read_template_embedded() {
        let loader = AssetLoader::new(None, None);
        let html = loader.read_template_string("messages.html").unwrap();
        assert!(html.contains("og.title"));
    }

    #[test]
    fn test_read_template_missing() {
        let loader = AssetLoader::new(None, None);
        let err = loader.read_template("nope.html").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_embedded_config_parses() {
        let loader = AssetLoader::new(None, None);
        let content = loader.read_config_string().unwrap();
        assert!(serde_yaml::from_str::<serde_yaml::Value>(&content).is_ok());
    }
}
