//! Error types for the platform-access crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `AuthenticationError`: failures resolving who the caller is
//! - `AuthorizationError`: why a resolved (or missing) caller was denied

use crate::role::Role;
use studydesk_core::UserId;
use std::fmt;

/// Errors from resolving a session through the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The stored session record could not be decoded.
    InvalidSession { session_id: String, reason: String },
    /// The identity provider could not be reached or failed the lookup.
    ProviderError { provider: String, reason: String },
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSession { session_id, reason } => {
                write!(f, "invalid session {session_id}: {reason}")
            }
            Self::ProviderError { provider, reason } => {
                write!(f, "identity provider '{provider}' error: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Reasons a request was refused by the access guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// No usable session: missing cookie, unknown or expired session.
    NotAuthenticated,
    /// A session exists but does not carry the required role.
    Forbidden {
        user_id: UserId,
        required: Role,
        actual: Option<Role>,
    },
    /// The identity provider failed; the request is treated as unauthenticated.
    UpstreamFailure { reason: String },
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "user is not authenticated"),
            Self::Forbidden {
                user_id,
                required,
                actual: Some(actual),
            } => write!(f, "user {user_id} has role {actual}, requires {required}"),
            Self::Forbidden {
                user_id,
                required,
                actual: None,
            } => write!(f, "user {user_id} has no role, requires {required}"),
            Self::UpstreamFailure { reason } => {
                write!(f, "session lookup failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthorizationError {}
