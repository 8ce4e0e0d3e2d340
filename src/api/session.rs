use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::headers::HeaderMapExt;
use crate::error::ApiError;
use crate::services::SessionStore;

/// Response from session creation
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Id to send as the `Session-Id` header on favorites requests
    pub session_id: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Start a session
///
/// Sessions scope the favorites list. They live in memory only, expire
/// after a configurable idle time, and are lost when the server restarts.
#[utoipa::path(
    post,
    path = "/api/session",
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 503, description = "Session limit reached"),
    ),
    tag = "Session"
)]
pub async fn handle_create_session<S: SessionStore>(
    State(sessions): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let info = sessions.create().await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: info.id.to_string(),
            created_at: info.created_at,
        }),
    ))
}

/// End a session
///
/// Discards the session and all of its favorites.
#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Session ended"),
        (status = 400, description = "Missing Session-Id header"),
        (status = 404, description = "Unknown session"),
    ),
    params(
        ("Session-Id" = String, Header, description = "Id from POST /api/session"),
    ),
    tag = "Session"
)]
pub async fn handle_end_session<S: SessionStore>(
    State(sessions): State<Arc<S>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = headers.require_session()?;
    sessions.end(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}
