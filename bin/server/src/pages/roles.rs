//! Role management: list users with their role and reassign roles.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use studydesk_core::UserId;
use studydesk_platform_access::Role;

use super::render;
use crate::auth::{AppState, RequireAdminPage};
use crate::error::DashboardError;
use crate::store::RoleAssignment;

/// One row of the role table, pre-formatted for display.
struct AssignmentView {
    user_id: String,
    display_name: String,
    email: String,
    role: &'static str,
}

impl From<RoleAssignment> for AssignmentView {
    fn from(assignment: RoleAssignment) -> Self {
        Self {
            user_id: assignment.user_id.to_string(),
            display_name: assignment.display_name,
            email: assignment.email.unwrap_or_default(),
            role: assignment.role.map_or("none", |r| r.as_str()),
        }
    }
}

#[derive(Template)]
#[template(path = "roles.html")]
struct RolesTemplate {
    assignments: Vec<AssignmentView>,
    roles: Vec<&'static str>,
}

/// `GET /admin/roles`
pub async fn list_roles(
    _access: RequireAdminPage,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, DashboardError> {
    let assignments = state.store.list_role_assignments().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load role assignments");
        DashboardError::Database {
            details: e.to_string(),
        }
    })?;

    tracing::debug!(count = assignments.len(), "Listed role assignments");

    render(&RolesTemplate {
        assignments: assignments.into_iter().map(AssignmentView::from).collect(),
        roles: Role::ALL.iter().map(Role::as_str).collect(),
    })
}

/// Form body for `POST /admin/roles`.
#[derive(Debug, Deserialize)]
pub struct AssignRoleForm {
    user_id: String,
    role: String,
}

/// `POST /admin/roles`: assigns a role and returns to the role list.
pub async fn assign_role(
    access: RequireAdminPage,
    State(state): State<Arc<AppState>>,
    Form(form): Form<AssignRoleForm>,
) -> Result<Redirect, DashboardError> {
    let user_id = UserId::from_str(&form.user_id).map_err(|e| {
        tracing::debug!(user_id = %form.user_id, error = %e, "Invalid user ID format");
        DashboardError::InvalidInput {
            field: "user_id",
            reason: e.to_string(),
        }
    })?;

    let role = Role::from_str(&form.role).map_err(|e| DashboardError::InvalidInput {
        field: "role",
        reason: e.to_string(),
    })?;

    let updated = state.store.assign_role(user_id, role).await.map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to assign role");
        DashboardError::Database {
            details: e.to_string(),
        }
    })?;

    if !updated {
        return Err(DashboardError::NotFound {
            entity: "User",
            id: user_id.to_string(),
        });
    }

    tracing::info!(
        admin_id = %access.session.user_id(),
        user_id = %user_id,
        role = %role,
        "Role assigned"
    );

    Ok(Redirect::to("/admin/roles"))
}
