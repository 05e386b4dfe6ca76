//! Task authoring.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use crate::auth::{AppState, RequireAdminPage};
use crate::error::DashboardError;
use crate::store::{MAX_TITLE_LEN, NewTask};

#[derive(Template)]
#[template(path = "new_task.html")]
struct NewTaskTemplate {
    max_title_len: usize,
}

/// `GET /admin/tasks/new`
pub async fn new_task(_access: RequireAdminPage) -> Result<Html<String>, DashboardError> {
    render(&NewTaskTemplate {
        max_title_len: MAX_TITLE_LEN,
    })
}

/// Form body for `POST /admin/tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
    title: String,
    #[serde(default)]
    description: String,
}

/// `POST /admin/tasks`: creates the task and returns to the dashboard.
pub async fn create_task(
    access: RequireAdminPage,
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateTaskForm>,
) -> Result<Redirect, DashboardError> {
    let new_task = NewTask::new(&form.title, Some(&form.description)).map_err(|e| {
        DashboardError::InvalidInput {
            field: "title",
            reason: e.to_string(),
        }
    })?;

    let author = access.session.user_id();
    let task = state
        .store
        .create_task(new_task, author)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %author, "Failed to create task");
            DashboardError::Database {
                details: e.to_string(),
            }
        })?;

    tracing::info!(task_id = %task.id, user_id = %author, "Task created");

    Ok(Redirect::to("/admin"))
}
