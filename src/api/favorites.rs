use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use outfit_color::ColorName;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::headers::HeaderMapExt;
use super::images::decode_image_field;
use crate::error::ApiError;
use crate::models::{AppConfig, Favorite, NewFavorite};
use crate::services::{AnalysisService, SessionStore};

/// Request body for saving a favorite
#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    /// Color name of the first piece, e.g. "red"
    pub first_color: String,
    /// Color name of the second piece, e.g. "black"
    pub second_color: String,
    /// First source image to keep with the favorite (base64)
    #[serde(default)]
    pub first_image: Option<String>,
    /// Second source image to keep with the favorite (base64)
    #[serde(default)]
    pub second_image: Option<String>,
}

/// The session's saved favorites, oldest first
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

fn parse_color(field: &str, value: &str) -> Result<ColorName, ApiError> {
    value
        .parse()
        .map_err(|e| ApiError::InvalidRequest(format!("{field}: {e}")))
}

/// Validate an optional image and keep it in its base64 form
///
/// The payload must be well-formed base64 within the size limit and must
/// decode as a JPEG or PNG image.
async fn check_image(
    analysis: &AnalysisService,
    field: &str,
    data: Option<String>,
    max_bytes: usize,
) -> Result<Option<String>, ApiError> {
    let Some(data) = data else {
        return Ok(None);
    };

    let bytes = decode_image_field(field, &data, max_bytes)?;
    analysis.validate_image(field.to_string(), bytes).await?;
    Ok(Some(data))
}

/// List favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    responses(
        (status = 200, description = "Favorites of the session", body = FavoritesResponse),
        (status = 400, description = "Missing Session-Id header"),
        (status = 404, description = "Unknown session"),
    ),
    params(
        ("Session-Id" = String, Header, description = "Id from POST /api/session"),
    ),
    tag = "Favorites"
)]
pub async fn handle_list_favorites<S: SessionStore>(
    State(sessions): State<Arc<S>>,
    headers: HeaderMap,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let session = headers.require_session()?;
    let favorites = sessions.favorites(&session).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

/// Save a favorite
///
/// Stores the color-name pair, with optional source images, in the session.
#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite saved", body = Favorite),
        (status = 400, description = "Missing header, unknown color name, or invalid image"),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Favorites limit reached"),
        (status = 413, description = "Image exceeds the size limit"),
    ),
    params(
        ("Session-Id" = String, Header, description = "Id from POST /api/session"),
    ),
    tag = "Favorites"
)]
pub async fn handle_add_favorite<S: SessionStore>(
    State(config): State<Arc<AppConfig>>,
    State(analysis): State<Arc<AnalysisService>>,
    State(sessions): State<Arc<S>>,
    headers: HeaderMap,
    JsonExtractor(request): JsonExtractor<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = headers.require_session()?;

    let favorite = NewFavorite {
        first_color: parse_color("first_color", &request.first_color)?,
        second_color: parse_color("second_color", &request.second_color)?,
        first_image: check_image(
            &analysis,
            "first_image",
            request.first_image,
            config.max_image_bytes,
        )
        .await?,
        second_image: check_image(
            &analysis,
            "second_image",
            request.second_image,
            config.max_image_bytes,
        )
        .await?,
    };

    let favorite = sessions.add_favorite(&session, favorite).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a favorite
#[utoipa::path(
    delete,
    path = "/api/favorites/{id}",
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Missing Session-Id header"),
        (status = 404, description = "Unknown session or favorite"),
    ),
    params(
        ("id" = u64, Path, description = "Favorite id"),
        ("Session-Id" = String, Header, description = "Id from POST /api/session"),
    ),
    tag = "Favorites"
)]
pub async fn handle_delete_favorite<S: SessionStore>(
    State(sessions): State<Arc<S>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let session = headers.require_session()?;
    sessions.remove_favorite(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
