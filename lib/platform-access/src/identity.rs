//! The identity provider seam.
//!
//! The dashboard never creates sessions. It asks an identity provider to
//! resolve the session ID presented by the client, once per request.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::AuthenticationError;
use crate::session::{Session, SessionId};

/// Outcome of a session lookup.
pub type SessionLookup = studydesk_core::Result<Option<Session>, AuthenticationError>;

/// Resolves session IDs into sessions.
///
/// Implementations return `Ok(None)` for unknown or expired sessions and
/// reserve errors for lookups that could not be performed at all.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_session(
        &self,
        id: &SessionId,
    ) -> SessionLookup;
}

/// Identity provider backed by a process-local map.
///
/// Sessions are registered and revoked directly by the caller. The server
/// binary never builds one; router tests use it to stand in for the
/// session store.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session, replacing any previous one with the same ID.
    pub async fn insert(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.id().clone(), session);
    }

    /// Removes a session. Returns true if it was present.
    pub async fn remove(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn get_session(
        &self,
        id: &SessionId,
    ) -> SessionLookup {
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .filter(|s| !s.is_expired())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use chrono::Duration;
    use studydesk_core::UserId;

    fn session(id: &str, duration: Duration) -> Session {
        Session::new(SessionId::from(id), UserId::new(), Some(Role::User), duration)
    }

    #[tokio::test]
    async fn returns_inserted_session() {
        let provider = InMemoryIdentityProvider::new();
        let s = session("a", Duration::hours(1));
        provider.insert(s.clone()).await;

        let found = provider
            .get_session(&SessionId::from("a"))
            .await
            .expect("lookup");
        assert_eq!(found, Some(s));
    }

    #[tokio::test]
    async fn hides_expired_sessions() {
        let provider = InMemoryIdentityProvider::new();
        provider.insert(session("old", Duration::seconds(-1))).await;

        let found = provider
            .get_session(&SessionId::from("old"))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn removed_session_is_no_longer_found() {
        let provider = InMemoryIdentityProvider::new();
        provider.insert(session("live", Duration::hours(1))).await;

        assert!(provider.remove(&SessionId::from("live")).await);
        assert!(!provider.remove(&SessionId::from("live")).await);
        let found = provider
            .get_session(&SessionId::from("live"))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }
}
