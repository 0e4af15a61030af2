use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::error::{ApiError, PreviewError};
use crate::models::PreviewColors;
use crate::server::AppState;

/// Compute adaptive colors for an image URL directly
///
/// Skips page scraping: the url parameter points at the image itself.
/// Unlike `/api/preview`, decode failures are reported to the caller
/// (422) since the image is the explicit subject of the request.
#[utoipa::path(
    get,
    path = "/api/colors",
    params(
        ("url" = String, Query, description = "Image URL to sample"),
    ),
    responses(
        (status = 200, description = "Computed colors", body = PreviewColors),
        (status = 400, description = "Missing url parameter"),
        (status = 422, description = "Image could not be decoded or is too large"),
        (status = 502, description = "Image could not be fetched"),
    ),
    tag = "Preview"
)]
pub async fn handle_colors(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let url = params.get("url").ok_or(ApiError::MissingParam("url"))?;

    tracing::info!(url = %url, "Colors request received");

    let image = state.images.fetch(url).await?;
    let palette = state
        .colors
        .palette_from_bytes(&image.bytes)
        .map_err(PreviewError::from)?;

    Ok(Json(PreviewColors::from(&palette)))
}
