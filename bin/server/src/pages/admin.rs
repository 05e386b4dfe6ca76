//! Admin dashboard home.

use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::render;
use crate::auth::{AppState, RequireAdminPage};
use crate::error::DashboardError;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    pending_questions: i64,
}

/// `GET /admin`: overview with the pending question count.
pub async fn dashboard(
    access: RequireAdminPage,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, DashboardError> {
    let pending_questions = state.store.count_pending_questions().await.map_err(|e| {
        tracing::error!(
            error = %e,
            user_id = %access.session.user_id(),
            "Failed to count pending questions"
        );
        DashboardError::Database {
            details: e.to_string(),
        }
    })?;

    render(&DashboardTemplate { pending_questions })
}
