//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::{ColorService, ImageLoader, OgScraper, TemplateService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scraper: Arc<OgScraper>,
    pub images: Arc<ImageLoader>,
    pub colors: Arc<ColorService>,
    pub templates: Arc<TemplateService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let scraper = Arc::new(OgScraper::new(&config)?);
    let images = Arc::new(ImageLoader::new(&config)?);
    let colors = Arc::new(ColorService::new(config.fallback_rgb()));
    let templates = Arc::new(TemplateService::new(asset_loader));

    Ok(AppState {
        config,
        scraper,
        images,
        colors,
        templates,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Preview API
        .route("/api/preview", get(api::handle_preview))
        .route("/api/colors", get(api::handle_colors))
        // Rendered platform mockups
        .route("/preview/:platform", get(api::handle_mockup))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
