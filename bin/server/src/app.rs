//! Route table for the dashboard server.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::questions;
use crate::auth::AppState;
use crate::pages::{admin, home, roles, tasks};

/// Builds the application router.
///
/// Every `/admin` page and `/api/admin` endpoint takes an admin guard
/// extractor as its first argument.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/admin", get(admin::dashboard))
        .route("/admin/roles", get(roles::list_roles).post(roles::assign_role))
        .route("/admin/tasks/new", get(tasks::new_task))
        .route("/admin/tasks", post(tasks::create_task))
        .route(
            "/api/admin/questions/pending-count",
            get(questions::pending_count),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
