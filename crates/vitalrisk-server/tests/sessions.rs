use vitalrisk_core::models::account::AuthenticatedUser;
use vitalrisk_server::session::{SESSION_TTL, Session, SessionStore};

fn user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 7,
        username: "alice".to_string(),
        full_name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
    }
}

#[tokio::test]
async fn live_session_is_returned() {
    let store = SessionStore::default();
    let session = store.create(user()).await;
    let found = store.get(session.token).await.unwrap();
    assert_eq!(found.user, user());
}

#[tokio::test]
async fn expired_session_is_dropped() {
    let store = SessionStore::with_ttl(jiff::SignedDuration::ZERO);
    let session = store.create(user()).await;
    assert!(store.get(session.token).await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_sweeps_expired_sessions() {
    let store = SessionStore::with_ttl(jiff::SignedDuration::ZERO);
    for _ in 0..3 {
        store.create(user()).await;
    }
    assert_eq!(store.len().await, 1);
}

#[test]
fn expiry_is_measured_from_login() {
    let started_at: jiff::Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();
    let session = Session {
        token: uuid::Uuid::new_v4(),
        user: user(),
        started_at,
    };
    let just_before = started_at + SESSION_TTL - jiff::SignedDuration::from_secs(1);
    assert!(!session.is_expired(SESSION_TTL, just_before));
    assert!(session.is_expired(SESSION_TTL, started_at + SESSION_TTL));
}
