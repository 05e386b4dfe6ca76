//! Question statistics for the dashboard.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::{AppState, RequireAdminApi};
use crate::error::ApiError;

/// Response body for the pending question count.
#[derive(Debug, Serialize)]
pub struct PendingCount {
    pub count: i64,
}

/// `GET /api/admin/questions/pending-count`
pub async fn pending_count(
    access: RequireAdminApi,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingCount>, ApiError> {
    let count = state.store.count_pending_questions().await.map_err(|e| {
        tracing::error!(
            error = %e,
            user_id = %access.session.user_id(),
            "Failed to count pending questions"
        );
        ApiError::Database {
            details: e.to_string(),
        }
    })?;

    Ok(Json(PendingCount { count }))
}
