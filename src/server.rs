//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::{GridService, PaletteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub palette: Arc<PaletteStore>,
    pub grid_service: Arc<GridService>,
}

impl AppState {
    pub fn new(config: AppConfig, palette: PaletteStore) -> Self {
        let palette = Arc::new(palette);
        let grid_service = Arc::new(GridService::new(palette.clone(), config.tone));

        Self {
            config: Arc::new(config),
            palette,
            grid_service,
        }
    }
}

/// Create application state from an asset loader.
///
/// Unreadable or invalid assets are logged and replaced by defaults, so this
/// never fails.
pub fn create_app_state(asset_loader: &AssetLoader) -> AppState {
    let config = AppConfig::load_from_assets(asset_loader);
    let palette = PaletteStore::load_from_assets(asset_loader);
    AppState::new(config, palette)
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/grid", post(api::handle_generate))
        .route("/api/grid/edit", post(api::handle_edit))
        .route("/api/palette", get(api::handle_palette))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
