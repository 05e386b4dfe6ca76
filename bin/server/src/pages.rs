//! Server-rendered dashboard pages.

pub mod admin;
pub mod home;
pub mod roles;
pub mod tasks;

use askama::Template;
use axum::response::Html;

use crate::error::DashboardError;

/// Renders a template into an HTML response.
fn render<T: Template>(template: &T) -> Result<Html<String>, DashboardError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Failed to render template");
        DashboardError::Render {
            details: e.to_string(),
        }
    })
}
