use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use outfit_color::ColorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid base64 in field '{field}'")]
    InvalidBase64 { field: String },

    #[error("Invalid image in field '{field}': {message}")]
    InvalidImage { field: String, message: String },

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Favorites limit reached ({max})")]
    FavoritesFull { max: usize },

    #[error("Too many active sessions ({max})")]
    TooManySessions { max: usize },

    #[error("Analysis error: {0}")]
    Analysis(#[from] ColorError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Attach the request field name to an image decoding failure.
    pub fn for_field(field: &str, err: ColorError) -> Self {
        ApiError::InvalidImage {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::FavoriteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBase64 { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidImage { .. } => StatusCode::BAD_REQUEST,
            ApiError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::FavoritesFull { .. } => StatusCode::CONFLICT,
            ApiError::TooManySessions { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Analysis(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
