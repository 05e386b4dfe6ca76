//! Access control for the dashboard server.
//!
//! This module provides:
//! - Database-backed session lookup (`SessionRepository`)
//! - Guard extractors that gate page and API routes on a required role
//!
//! Sessions are minted by the external identity provider. The server only
//! reads the session cookie, resolves it, and applies the access guard.
//! The user's role is read from the `users` table at lookup time, so a role
//! change takes effect on the user's next request.

pub mod db;
pub mod middleware;

use std::sync::Arc;
use studydesk_platform_access::IdentityProvider;

use crate::config::{AccessConfig, SessionConfig};
use crate::store::DashboardStore;

pub use db::SessionRepository;
pub use middleware::{
    AdminRole, ApiAccess, ApiRejection, PageAccess, PageRejection, RequireAdminApi,
    RequireAdminPage, RoleRequirement,
};

/// Shared application state.
pub struct AppState {
    /// Resolves session cookies into sessions.
    pub identity: Arc<dyn IdentityProvider>,
    /// Dashboard data access.
    pub store: Arc<dyn DashboardStore>,
    /// Session configuration.
    pub session_config: SessionConfig,
    /// Access guard configuration.
    pub access_config: AccessConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn DashboardStore>,
        session_config: SessionConfig,
        access_config: AccessConfig,
    ) -> Self {
        Self {
            identity,
            store,
            session_config,
            access_config,
        }
    }
}
