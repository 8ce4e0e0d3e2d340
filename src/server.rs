//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    http::header::CACHE_CONTROL,
    routing::{delete, get, post},
    Router,
};
use outfit_color::OutfitChecker;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{AnalysisService, InMemorySessionStore, SessionLimits};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
    pub sessions: Arc<InMemorySessionStore>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if !config.similarity_threshold.is_finite() {
        anyhow::bail!(
            "similarity_threshold must be a finite number, got {}",
            config.similarity_threshold
        );
    }

    let checker = OutfitChecker::new().similarity_threshold(config.similarity_threshold);
    let sessions = Arc::new(InMemorySessionStore::new(SessionLimits {
        max_sessions: config.max_sessions,
        max_favorites: config.max_favorites,
        idle_timeout: config.session_idle_timeout(),
    }));

    Ok(AppState {
        config: Arc::new(config),
        analysis: Arc::new(AnalysisService::new(checker)),
        sessions,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Request
/// bodies are capped to fit the largest allowed outfit upload, and results
/// are marked uncacheable since they depend on the uploaded bytes.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_bytes();

    Router::new()
        // Matching endpoints
        .route("/api/compare", post(handle_compare))
        .route("/api/colors", post(handle_colors))
        .route("/api/outfit", post(handle_outfit))
        // Session-scoped favorites
        .route(
            "/api/session",
            post(handle_create_session).delete(handle_end_session),
        )
        .route(
            "/api/favorites",
            get(handle_list_favorites).post(handle_add_favorite),
        )
        .route("/api/favorites/:id", delete(handle_delete_favorite))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            axum::http::HeaderValue::from_static("no-store"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_compare(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::CompareRequest>,
) -> Result<axum::Json<api::CompareResponse>, ApiError> {
    api::handle_compare(
        axum::extract::State(state.config),
        axum::extract::State(state.analysis),
        body,
    )
    .await
}

async fn handle_colors(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::ColorRequest>,
) -> Result<axum::Json<api::ColorInfo>, ApiError> {
    api::handle_colors(
        axum::extract::State(state.config),
        axum::extract::State(state.analysis),
        body,
    )
    .await
}

async fn handle_outfit(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::OutfitRequest>,
) -> Result<axum::Json<api::OutfitResponse>, ApiError> {
    api::handle_outfit(
        axum::extract::State(state.config),
        axum::extract::State(state.analysis),
        body,
    )
    .await
}

async fn handle_create_session(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_create_session(axum::extract::State(state.sessions)).await
}

async fn handle_end_session(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::http::StatusCode, ApiError> {
    api::handle_end_session(axum::extract::State(state.sessions), headers).await
}

async fn handle_list_favorites(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::Json<api::FavoritesResponse>, ApiError> {
    api::handle_list_favorites(axum::extract::State(state.sessions), headers).await
}

async fn handle_add_favorite(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::Json<api::FavoriteRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_add_favorite(
        axum::extract::State(state.config),
        axum::extract::State(state.analysis),
        axum::extract::State(state.sessions),
        headers,
        body,
    )
    .await
}

async fn handle_delete_favorite(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    path: axum::extract::Path<u64>,
) -> Result<axum::http::StatusCode, ApiError> {
    api::handle_delete_favorite(axum::extract::State(state.sessions), headers, path).await
}
