use serde::Deserialize;
use std::path::Path;

/// Service configuration loaded from config.yaml
///
/// Matching thresholds for named colors and the rule table are fixed; only
/// service limits and the default histogram threshold are configurable.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Largest accepted decoded image, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Largest number of accessory images per outfit request
    #[serde(default = "default_max_accessories")]
    pub max_accessories: usize,

    /// Largest number of favorites kept per session
    #[serde(default = "default_max_favorites")]
    pub max_favorites: usize,

    /// Largest number of live sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds without a request after which a session expires
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,

    /// Similarity percentage used when a compare request gives none
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_max_accessories() -> usize {
    8
}

fn default_max_favorites() -> usize {
    100
}

fn default_max_sessions() -> usize {
    1000
}

fn default_session_idle_secs() -> u64 {
    60 * 60
}

fn default_similarity_threshold() -> f64 {
    outfit_color::DEFAULT_SIMILARITY_THRESHOLD
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// A missing path, unreadable file, or parse error is logged and yields
    /// [`AppConfig::default`].
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_image_bytes = config.max_image_bytes,
                        max_favorites = config.max_favorites,
                        max_sessions = config.max_sessions,
                        similarity_threshold = config.similarity_threshold,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Request body limit that fits the largest outfit request.
    ///
    /// Base64 grows data by 4/3; each image also gets some slack for JSON
    /// framing. Saturates at `usize::MAX` for absurd limits.
    pub fn max_request_bytes(&self) -> usize {
        let per_image = (self.max_image_bytes / 3)
            .saturating_mul(4)
            .saturating_add(4 + 1024);
        per_image.saturating_mul(self.max_accessories.saturating_add(2))
    }

    /// Idle time after which a session expires.
    pub fn session_idle_timeout(&self) -> chrono::Duration {
        let secs = i64::try_from(self.session_idle_secs).unwrap_or(i64::MAX);
        chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_image_bytes: default_max_image_bytes(),
            max_accessories: default_max_accessories(),
            max_favorites: default_max_favorites(),
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle_secs(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
        assert_eq!(config.max_accessories, 8);
        assert_eq!(config.max_favorites, 100);
        assert_eq!(config.max_sessions, 1000);
        assert_eq!(config.session_idle_secs, 3600);
        assert_eq!(config.similarity_threshold, 30.0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = AppConfig::from_yaml_str("max_favorites: 5\n").unwrap();
        assert_eq!(config.max_favorites, 5);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.similarity_threshold, 30.0);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
bind_addr: "127.0.0.1:8080"
max_image_bytes: 1024
max_accessories: 2
max_favorites: 3
max_sessions: 4
session_idle_secs: 60
similarity_threshold: 55.5
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            AppConfig {
                bind_addr: "127.0.0.1:8080".to_string(),
                max_image_bytes: 1024,
                max_accessories: 2,
                max_favorites: 3,
                max_sessions: 4,
                session_idle_secs: 60,
                similarity_threshold: 55.5,
            }
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(AppConfig::from_yaml_str("max_favorites: [oops").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_accessories: 1").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.max_accessories, 1);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("missing.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_broken_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_favorites: not-a-number").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_max_request_bytes_covers_outfit() {
        let config = AppConfig {
            max_image_bytes: 3000,
            max_accessories: 1,
            ..AppConfig::default()
        };
        // 3 images of 4000 base64 bytes each plus framing
        assert_eq!(config.max_request_bytes(), 3 * (4000 + 4 + 1024));
    }

    #[test]
    fn test_max_request_bytes_saturates() {
        let config = AppConfig::from_yaml_str(&format!(
            "max_image_bytes: {}\nmax_accessories: {}\n",
            usize::MAX,
            usize::MAX
        ))
        .unwrap();
        assert_eq!(config.max_request_bytes(), usize::MAX);
    }

    #[test]
    fn test_session_idle_timeout() {
        let config = AppConfig {
            session_idle_secs: 90,
            ..AppConfig::default()
        };
        assert_eq!(config.session_idle_timeout(), chrono::Duration::seconds(90));

        let config = AppConfig {
            session_idle_secs: u64::MAX,
            ..AppConfig::default()
        };
        assert_eq!(config.session_idle_timeout(), chrono::Duration::MAX);
    }
}
