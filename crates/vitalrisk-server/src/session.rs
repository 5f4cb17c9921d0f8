use std::collections::HashMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use tokio::sync::Mutex;
use uuid::Uuid;

use vitalrisk_core::models::account::AuthenticatedUser;

pub const SESSION_COOKIE: &str = "vitalrisk_session";

/// How long a session stays valid after login.
pub const SESSION_TTL: jiff::SignedDuration = jiff::SignedDuration::from_secs(12 * 60 * 60);

/// One logged-in browser. Handlers receive it as a request extension.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub user: AuthenticatedUser,
    pub started_at: jiff::Timestamp,
}

impl Session {
    pub fn is_expired(&self, ttl: jiff::SignedDuration, now: jiff::Timestamp) -> bool {
        now.duration_since(self.started_at) >= ttl
    }
}

/// In-memory session table. Sessions do not survive a restart and expire
/// after the store's TTL.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    ttl: jiff::SignedDuration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: jiff::SignedDuration) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
        }
    }

    /// Start a session. Expired sessions are swept out at the same time.
    pub async fn create(&self, user: AuthenticatedUser) -> Session {
        let now = jiff::Timestamp::now();
        let session = Session {
            token: Uuid::new_v4(),
            user,
            started_at: now,
        };
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl, now));
        if sessions.len() < before {
            tracing::debug!(expired = before - sessions.len(), "sessions swept");
        }
        sessions.insert(session.token, session.clone());
        tracing::debug!(user_id = session.user.id, "session started");
        session
    }

    /// A live session for `token`. An expired one is removed and not returned.
    pub async fn get(&self, token: Uuid) -> Option<Session> {
        let mut sessions = self.inner.lock().await;
        let session = sessions.get(&token)?;
        if session.is_expired(self.ttl, jiff::Timestamp::now()) {
            tracing::debug!(user_id = session.user.id, "session expired");
            sessions.remove(&token);
            return None;
        }
        Some(session.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn remove(&self, token: Uuid) -> Option<Session> {
        self.inner.lock().await.remove(&token)
    }

    /// The session named by the request's cookie, if it is still live.
    pub async fn from_headers(&self, headers: &HeaderMap) -> Option<Session> {
        let token = session_token(headers)?;
        self.get(token).await
    }
}

/// Extract the session token from any `Cookie` header on the request.
pub fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn set_cookie(token: Uuid) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
