use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Opaque session identifier handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a random 24-character alphanumeric id
    pub fn generate() -> Self {
        use rand::Rng;
        let id: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved outfit combination
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favorite {
    /// Id unique within the session
    pub id: u64,
    /// Human-readable pair description, e.g. "red & black"
    pub description: String,
    /// Name of the first piece's color
    pub first_color: String,
    /// Name of the second piece's color
    pub second_color: String,
    /// First source image (base64), if saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_image: Option<String>,
    /// Second source image (base64), if saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_image: Option<String>,
    /// When the favorite was saved
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Data for a favorite that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub first_color: outfit_color::ColorName,
    pub second_color: outfit_color::ColorName,
    pub first_image: Option<String>,
    pub second_image: Option<String>,
}

impl NewFavorite {
    pub fn description(&self) -> String {
        format!("{} & {}", self.first_color, self.second_color)
    }

    /// Assign an id and timestamp
    pub fn into_favorite(self, id: u64) -> Favorite {
        Favorite {
            id,
            description: self.description(),
            first_color: self.first_color.to_string(),
            second_color: self.second_color.to_string(),
            first_image: self.first_image,
            second_image: self.second_image,
            created_at: chrono::Utc::now(),
        }
    }
}
