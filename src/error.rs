use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required query parameter: {0}")]
    MissingParam(&'static str),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Image decode error: {0}")]
    Decode(#[from] og_color::DecodeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingParam(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UnknownPlatform(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Preview(e) => (preview_status(e), e.to_string()),
            ApiError::Template(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

fn preview_status(e: &PreviewError) -> StatusCode {
    match e {
        PreviewError::Fetch { .. } | PreviewError::UpstreamStatus { .. } => {
            StatusCode::BAD_GATEWAY
        }
        PreviewError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        PreviewError::ImageTooLarge { .. } | PreviewError::Decode(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}
