//! Header parsing utilities for session-scoped requests.

use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::models::SessionId;

/// Header carrying the session id on session-scoped endpoints.
pub const SESSION_HEADER: &str = "Session-Id";

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, or return an error if missing.
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError>;

    /// Get the session id, or return an error if missing or blank.
    fn require_session(&self) -> Result<SessionId, ApiError>;
}

impl HeaderMapExt for HeaderMap {
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError> {
        self.get(name)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingHeader(name))
    }

    fn require_session(&self) -> Result<SessionId, ApiError> {
        let value = self.require_str(SESSION_HEADER)?.trim();
        if value.is_empty() {
            return Err(ApiError::MissingHeader(SESSION_HEADER));
        }
        Ok(SessionId::new(value))
    }
}
