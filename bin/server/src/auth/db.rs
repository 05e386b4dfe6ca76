//! Database-backed session lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use studydesk_core::UserId;
use studydesk_platform_access::{
    AuthenticationError, IdentityProvider, Role, Session, SessionId, SessionLookup,
};

/// Row type for session queries, joined with the owning user's role label.
#[derive(FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    role: Option<String>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionRow {
    fn try_into_session(self) -> Result<Session, AuthenticationError> {
        let user_id = UserId::parse_stored(&self.user_id).map_err(|e| {
            AuthenticationError::InvalidSession {
                session_id: self.id.clone(),
                reason: format!("invalid user id '{}': {}", self.user_id, e),
            }
        })?;

        let role = Role::from_label(self.role.as_deref());
        if role.is_none() {
            tracing::debug!(
                session_id = %self.id,
                label = ?self.role,
                "Session user has no recognized role"
            );
        }

        Ok(Session::with_all_fields(
            SessionId::new(self.id),
            user_id,
            role,
            self.created_at,
            self.expires_at,
        ))
    }
}

/// Repository for session operations.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Creates a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a session by ID, with the role its user currently holds.
    pub async fn find_by_id(
        &self,
        id: &SessionId,
    ) -> SessionLookup {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.user_id, u.role, s.created_at, s.expires_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthenticationError::ProviderError {
            provider: "postgres".to_string(),
            reason: e.to_string(),
        })?;

        match row {
            Some(r) => Ok(Some(r.try_into_session()?)),
            None => Ok(None),
        }
    }

    /// Deletes expired sessions.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl IdentityProvider for SessionRepository {
    async fn get_session(
        &self,
        id: &SessionId,
    ) -> SessionLookup {
        Ok(self.find_by_id(id).await?.filter(|s| !s.is_expired()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn row(user_id: String, role: Option<&str>) -> SessionRow {
        let created_at = Utc::now();
        SessionRow {
            id: "sess_row".to_string(),
            user_id,
            role: role.map(str::to_string),
            created_at,
            expires_at: created_at + Duration::minutes(5),
        }
    }

    #[test]
    fn exact_label_maps_to_role() {
        let user_id = UserId::new();
        let session = row(user_id.to_string(), Some("admin"))
            .try_into_session()
            .expect("decode");
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.user_id(), user_id);
    }

    #[test]
    fn miscased_label_maps_to_no_role() {
        let session = row(UserId::new().to_string(), Some("Admin"))
            .try_into_session()
            .expect("decode");
        assert_eq!(session.role(), None);
        assert!(!session.is_admin());
    }

    #[test]
    fn missing_label_maps_to_no_role() {
        let session = row(UserId::new().to_string(), None)
            .try_into_session()
            .expect("decode");
        assert_eq!(session.role(), None);
    }

    #[test]
    fn corrupt_user_id_is_invalid_session() {
        let err = row("not-an-id".to_string(), Some("admin"))
            .try_into_session()
            .expect_err("should fail");
        assert!(matches!(err, AuthenticationError::InvalidSession { .. }));
    }

    #[test]
    fn bare_ulid_user_id_is_invalid_session() {
        let err = row(UserId::new().as_ulid().to_string(), Some("admin"))
            .try_into_session()
            .expect_err("should fail");
        assert!(matches!(err, AuthenticationError::InvalidSession { .. }));
    }
}
