//! Mock origin server standing in for the scraped website and its CDN.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockOrigin {
    pub server: MockServer,
}

impl MockOrigin {
    /// Start a new mock origin
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock origin
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get URL for a specific path
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.server.uri(), endpoint)
    }

    /// Serve an HTML page at the given path
    pub async fn mount_html(&self, endpoint: &str, html: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(html)
                    .insert_header("content-type", "text/html; charset=utf-8"),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve raw bytes with a content type at the given path
    pub async fn mount_bytes(&self, endpoint: &str, bytes: Vec<u8>, content_type: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_raw(bytes, content_type))
            .mount(&self.server)
            .await;
    }

    /// Serve an error status at the given path
    pub async fn mount_status(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
