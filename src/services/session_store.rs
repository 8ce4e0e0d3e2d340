use crate::error::ApiError;
use crate::models::{Favorite, NewFavorite, SessionId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for session-scoped favorites storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a new empty session
    async fn create(&self) -> Result<SessionInfo, ApiError>;

    /// End a session and discard its favorites
    async fn end(&self, session: &SessionId) -> Result<(), ApiError>;

    /// List a session's favorites, oldest first
    async fn favorites(&self, session: &SessionId) -> Result<Vec<Favorite>, ApiError>;

    /// Append a favorite to a session
    async fn add_favorite(
        &self,
        session: &SessionId,
        favorite: NewFavorite,
    ) -> Result<Favorite, ApiError>;

    /// Remove one favorite by id
    async fn remove_favorite(&self, session: &SessionId, id: u64) -> Result<(), ApiError>;
}

/// Public view of a freshly created session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
}

/// Capacity and lifetime limits for [`InMemorySessionStore`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub max_favorites: usize,
    /// A session untouched for longer than this is dropped
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            max_favorites: 100,
            idle_timeout: Duration::hours(1),
        }
    }
}

struct Session {
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
    next_favorite_id: u64,
    favorites: Vec<Favorite>,
}

impl Session {
    fn is_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now.signed_duration_since(self.last_seen) > idle_timeout
    }
}

/// In-memory session storage
///
/// Sessions are never persisted and disappear on restart. Idle sessions
/// expire; they are swept whenever a new session is created and refused on
/// lookup.
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    limits: SessionLimits,
}

impl InMemorySessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            limits,
        }
    }

    /// Look up a live session and mark it as used
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<SessionId, Session>,
        id: &SessionId,
    ) -> Result<&'a mut Session, ApiError> {
        let now = Utc::now();
        let expired = sessions
            .get(id)
            .ok_or(ApiError::SessionNotFound)?
            .is_expired(now, self.limits.idle_timeout);
        if expired {
            sessions.remove(id);
            tracing::info!(session = %id, "Session expired");
            return Err(ApiError::SessionNotFound);
        }

        let session = sessions.get_mut(id).ok_or(ApiError::SessionNotFound)?;
        session.last_seen = now;
        Ok(session)
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionLimits::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<SessionInfo, ApiError> {
        let mut sessions = self.sessions.write().await;
        let created_at = Utc::now();

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(created_at, self.limits.idle_timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Expired sessions evicted");
        }

        if sessions.len() >= self.limits.max_sessions {
            tracing::warn!(max = self.limits.max_sessions, "Session limit reached");
            return Err(ApiError::TooManySessions {
                max: self.limits.max_sessions,
            });
        }

        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }

        sessions.insert(
            id.clone(),
            Session {
                created_at,
                last_seen: created_at,
                next_favorite_id: 1,
                favorites: Vec::new(),
            },
        );

        tracing::info!(session = %id, "Session created");
        Ok(SessionInfo { id, created_at })
    }

    async fn end(&self, session: &SessionId) -> Result<(), ApiError> {
        let removed = self
            .sessions
            .write()
            .await
            .remove(session)
            .ok_or(ApiError::SessionNotFound)?;

        tracing::info!(
            session = %session,
            favorites = removed.favorites.len(),
            age_secs = (Utc::now() - removed.created_at).num_seconds(),
            "Session ended"
        );
        Ok(())
    }

    async fn favorites(&self, session: &SessionId) -> Result<Vec<Favorite>, ApiError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.touch(&mut sessions, session)?;
        Ok(entry.favorites.clone())
    }

    async fn add_favorite(
        &self,
        session: &SessionId,
        favorite: NewFavorite,
    ) -> Result<Favorite, ApiError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.touch(&mut sessions, session)?;

        if entry.favorites.len() >= self.limits.max_favorites {
            return Err(ApiError::FavoritesFull {
                max: self.limits.max_favorites,
            });
        }

        let favorite = favorite.into_favorite(entry.next_favorite_id);
        entry.next_favorite_id += 1;
        entry.favorites.push(favorite.clone());

        tracing::info!(
            session = %session,
            favorite_id = favorite.id,
            description = %favorite.description,
            "Favorite added"
        );
        Ok(favorite)
    }

    async fn remove_favorite(&self, session: &SessionId, id: u64) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.touch(&mut sessions, session)?;

        let position = entry
            .favorites
            .iter()
            .position(|f| f.id == id)
            .ok_or(ApiError::FavoriteNotFound)?;
        entry.favorites.remove(position);

        tracing::info!(session = %session, favorite_id = id, "Favorite removed");
        Ok(())
    }
}
