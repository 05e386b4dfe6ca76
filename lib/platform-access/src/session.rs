//! Sessions resolved from the external identity provider.
//!
//! Sessions are created by the identity provider when a user logs in. This
//! crate only reads them: a session lives for the duration of one request
//! and is never persisted from here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use studydesk_core::UserId;

use crate::role::Role;

/// Opaque session identifier, as carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new session ID from a string.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the session ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An authenticated user's session.
///
/// The role is optional: identity records without a recognized role still
/// resolve to a session, but such a session satisfies no role requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    role: Option<Role>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session valid for `duration` from now.
    #[must_use]
    pub fn new(id: SessionId, user_id: UserId, role: Option<Role>, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            role,
            created_at: now,
            expires_at: now + duration,
        }
    }

    /// Reconstitutes a session from storage.
    #[must_use]
    pub fn with_all_fields(
        id: SessionId,
        user_id: UserId,
        role: Option<Role>,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            role,
            created_at,
            expires_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the session's role, if it carries a recognized one.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns true if the session carries exactly `required`.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.role == Some(required)
    }

    /// Returns true if the session carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}
