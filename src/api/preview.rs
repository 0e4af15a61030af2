use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{OgData, PreviewColors};
use crate::server::AppState;
use crate::services::{LoadedImage, PreviewPalette};

/// Response from the /api/preview endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewResponse {
    /// Scraped Open Graph metadata
    pub og: OgData,
    /// Adaptive colors computed from the preview image
    pub colors: PreviewColors,
}

/// Scrape a page and compute its preview colors
///
/// Fetches the page, extracts Open Graph metadata, samples the preview
/// image's dominant color, and derives the background/text/subtext colors
/// the mockups use. A missing or undecodable image does not fail the
/// preview; the response carries the neutral fallback palette with
/// `colors.fallback` set.
#[utoipa::path(
    get,
    path = "/api/preview",
    params(
        ("url" = String, Query, description = "Page URL to preview (scheme optional)"),
    ),
    responses(
        (status = 200, description = "Metadata and colors", body = PreviewResponse),
        (status = 400, description = "Missing url parameter"),
        (status = 502, description = "Page could not be fetched"),
    ),
    tag = "Preview"
)]
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let url = params.get("url").ok_or(ApiError::MissingParam("url"))?;

    tracing::info!(url = %url, "Preview request received");

    let og = state.scraper.fetch(url).await?;
    let (palette, _) = resolve_palette(&og, &state).await;

    Ok(Json(PreviewResponse {
        colors: PreviewColors::from(&palette),
        og,
    }))
}

/// Load the page's image and run the color engine over it.
///
/// Image problems degrade to the fallback palette rather than erroring:
/// a preview with neutral chrome beats no preview.
pub async fn resolve_palette(
    og: &OgData,
    state: &AppState,
) -> (PreviewPalette, Option<LoadedImage>) {
    let Some(image_url) = og.image.as_deref() else {
        tracing::debug!(url = %og.url, "Page has no preview image, using fallback palette");
        return (state.colors.fallback_palette(), None);
    };

    let image = match state.images.fetch(image_url).await {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(image_url, error = %e, "Image fetch failed, using fallback palette");
            return (state.colors.fallback_palette(), None);
        }
    };

    match state.colors.palette_from_bytes(&image.bytes) {
        Ok(palette) => (palette, Some(image)),
        Err(e) => {
            tracing::warn!(image_url, error = %e, "Image decode failed, using fallback palette");
            (state.colors.fallback_palette(), None)
        }
    }
}
