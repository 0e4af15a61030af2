//! Preview image loading.
//!
//! Downloads the image a page's metadata points at, with a size cap so a
//! hostile or misconfigured origin cannot feed the sampler a gigabyte.
//! The loader reports the origin's Content-Type alongside the bytes; the
//! mockup renderer reuses it when inlining the image as a data URI.

use crate::error::PreviewError;
use crate::models::AppConfig;

/// A fetched image: raw bytes plus the Content-Type the origin declared.
#[derive(Debug)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Fetches preview images over HTTP
pub struct ImageLoader {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImageLoader {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            max_bytes: config.max_image_bytes,
        })
    }

    /// Fetch image bytes from an absolute http(s) URL.
    ///
    /// Fails with [`PreviewError::ImageTooLarge`] when either the declared
    /// Content-Length or the actual body exceeds the configured cap.
    pub async fn fetch(&self, url: &str) -> Result<LoadedImage, PreviewError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PreviewError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PreviewError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Reject on the declared length before pulling the body
        if let Some(len) = response.content_length() {
            if len as usize > self.max_bytes {
                return Err(PreviewError::ImageTooLarge {
                    size: len as usize,
                    max: self.max_bytes,
                });
            }
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|source| PreviewError::Fetch {
                url: url.to_string(),
                source,
            })?;

        if bytes.len() > self.max_bytes {
            return Err(PreviewError::ImageTooLarge {
                size: bytes.len(),
                max: self.max_bytes,
            });
        }

        tracing::debug!(url, size = bytes.len(), "Fetched preview image");

        Ok(LoadedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
