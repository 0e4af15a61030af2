use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;

use super::preview::resolve_palette;
use crate::error::ApiError;
use crate::models::{Platform, PreviewColors};
use crate::server::AppState;
use crate::services::LoadedImage;
use crate::utils::url::clean_url;

/// Render a platform mockup for a URL
///
/// Returns a standalone HTML page showing how the link's preview card
/// looks on the given platform (`messages`, `whatsapp`, or `instagram`),
/// tinted with the adaptive colors. The preview image is inlined as a
/// data URI so the mockup has no external fetches.
#[utoipa::path(
    get,
    path = "/preview/{platform}",
    params(
        ("platform" = String, Path, description = "Platform style: messages, whatsapp, or instagram"),
        ("url" = String, Query, description = "Page URL to preview (scheme optional)"),
    ),
    responses(
        (status = 200, description = "Rendered mockup", content_type = "text/html"),
        (status = 400, description = "Missing url parameter"),
        (status = 404, description = "Unknown platform"),
        (status = 502, description = "Page could not be fetched"),
    ),
    tag = "Mockup"
)]
pub async fn handle_mockup(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let platform: Platform = platform
        .parse()
        .map_err(|()| ApiError::UnknownPlatform(platform))?;
    let url = params.get("url").ok_or(ApiError::MissingParam("url"))?;

    tracing::info!(url = %url, platform = %platform, "Mockup request received");

    let og = state.scraper.fetch(url).await?;
    let (palette, image) = resolve_palette(&og, &state).await;

    let host = clean_url(&og.url).to_string();
    let data = json!({
        "og": og,
        "colors": PreviewColors::from(&palette),
        "host": host,
        "image_data_uri": image.as_ref().map(to_data_uri),
        "truncate": {
            "title": state.config.truncate.title,
            "description": state.config.truncate.description,
        },
    });

    let html = state
        .templates
        .render(platform, &data)
        .map_err(|e| ApiError::Template(e.to_string()))?;

    Ok(Html(html))
}

/// Inline image bytes as a data URI, trusting the origin's media type.
fn to_data_uri(image: &LoadedImage) -> String {
    let mime = image
        .content_type
        .as_deref()
        .and_then(|ct| ct.split(';').next())
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or("image/png");

    format!("data:{};base64,{}", mime, BASE64.encode(&image.bytes))
}
