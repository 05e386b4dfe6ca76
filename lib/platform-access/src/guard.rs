//! The role-gated access check.
//!
//! `authorize` is the pure decision. `AccessGuard::resolve` wraps it with
//! the one asynchronous step every protected request performs: looking the
//! session up through an [`IdentityProvider`].

use crate::error::AuthorizationError;
use crate::identity::IdentityProvider;
use crate::role::Role;
use crate::session::{Session, SessionId};
use tracing::{debug, warn};

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No session, or the session has expired.
    Unauthenticated,
    /// The session's role is absent or differs from the required role.
    Forbidden,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenialReason),
}

impl AccessDecision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides whether `session` may reach logic protected by `required`.
#[must_use]
pub fn authorize(session: Option<&Session>, required: Role) -> AccessDecision {
    match session {
        None => AccessDecision::Deny(DenialReason::Unauthenticated),
        Some(s) if s.is_expired() => AccessDecision::Deny(DenialReason::Unauthenticated),
        Some(s) if s.has_role(required) => AccessDecision::Allow,
        Some(_) => AccessDecision::Deny(DenialReason::Forbidden),
    }
}

/// Checkpoint bound to a single required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGuard {
    required: Role,
}

impl AccessGuard {
    #[must_use]
    pub const fn new(required: Role) -> Self {
        Self { required }
    }

    #[must_use]
    pub const fn required_role(&self) -> Role {
        self.required
    }

    /// Decides access for an already-resolved session.
    #[must_use]
    pub fn authorize(&self, session: Option<&Session>) -> AccessDecision {
        authorize(session, self.required)
    }

    /// Resolves the session behind `session_id` and authorizes it.
    ///
    /// Returns the session when access is allowed. A missing cookie skips
    /// the lookup entirely; a failing provider denies.
    pub async fn resolve(
        &self,
        provider: &dyn IdentityProvider,
        session_id: Option<&SessionId>,
    ) -> Result<Session, AuthorizationError> {
        let Some(session_id) = session_id else {
            debug!(required = %self.required, "No session cookie presented");
            return Err(AuthorizationError::NotAuthenticated);
        };

        let session = match provider.get_session(session_id).await {
            Ok(session) => session,
            Err(e) => {
                warn!(
                    error = %e,
                    session_id = %session_id,
                    "Session lookup failed, denying request"
                );
                return Err(AuthorizationError::UpstreamFailure {
                    reason: e.to_string(),
                });
            }
        };

        match self.authorize(session.as_ref()) {
            AccessDecision::Allow => session.ok_or(AuthorizationError::NotAuthenticated),
            AccessDecision::Deny(DenialReason::Unauthenticated) => {
                debug!(
                    session_id = %session_id,
                    required = %self.required,
                    "Session missing or expired"
                );
                Err(AuthorizationError::NotAuthenticated)
            }
            AccessDecision::Deny(DenialReason::Forbidden) => {
                let (user_id, actual) = session
                    .map(|s| (s.user_id(), s.role()))
                    .ok_or(AuthorizationError::NotAuthenticated)?;
                warn!(
                    user_id = %user_id,
                    required = %self.required,
                    actual = ?actual,
                    "User lacks required role"
                );
                Err(AuthorizationError::Forbidden {
                    user_id,
                    required: self.required,
                    actual,
                })
            }
        }
    }
}
