//! User repository: role listing and assignment.

use sqlx::{FromRow, PgPool};
use studydesk_core::UserId;
use studydesk_platform_access::Role;

use crate::store::RoleAssignment;

/// Row type for role assignment queries.
#[derive(FromRow)]
struct RoleAssignmentRow {
    id: String,
    display_name: String,
    email: Option<String>,
    role: Option<String>,
}

impl RoleAssignmentRow {
    fn try_into_assignment(self) -> Result<RoleAssignment, sqlx::Error> {
        let user_id = UserId::parse_stored(&self.id).map_err(|e| {
            sqlx::Error::Decode(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid user id '{}': {}", self.id, e),
            )))
        })?;

        let role = Role::from_label(self.role.as_deref());
        if role.is_none() && self.role.is_some() {
            tracing::warn!(
                user_id = %user_id,
                label = ?self.role,
                "Ignoring unrecognized role label"
            );
        }

        Ok(RoleAssignment {
            user_id,
            display_name: self.display_name,
            email: self.email,
            role,
        })
    }
}

/// Repository for user operations.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all users with their role, ordered by display name.
    pub async fn list_role_assignments(&self) -> Result<Vec<RoleAssignment>, sqlx::Error> {
        let rows: Vec<RoleAssignmentRow> = sqlx::query_as(
            r#"
            SELECT id, display_name, email, role
            FROM users
            ORDER BY display_name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(RoleAssignmentRow::try_into_assignment)
            .collect()
    }

    /// Stores `role` as the user's role label.
    ///
    /// Returns false when no user has the given ID.
    pub async fn set_role(&self, user_id: UserId, role: Role) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            "#,
        )
        .bind(user_id.to_string())
        .bind(role.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: String, role: Option<&str>) -> RoleAssignmentRow {
        RoleAssignmentRow {
            id,
            display_name: "Grace".to_string(),
            email: None,
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn decoded_id_writes_back_as_stored() {
        let stored = UserId::new().to_string();
        let assignment = row(stored.clone(), Some("user"))
            .try_into_assignment()
            .expect("decode");
        assert_eq!(assignment.user_id.to_string(), stored);
        assert_eq!(assignment.role, Some(Role::User));
    }

    #[test]
    fn bare_ulid_id_is_rejected() {
        let bare = UserId::new().as_ulid().to_string();
        let err = row(bare, None)
            .try_into_assignment()
            .expect_err("should fail");
        assert!(matches!(err, sqlx::Error::Decode(_)));
    }

    #[test]
    fn unknown_label_is_no_role() {
        let assignment = row(UserId::new().to_string(), Some("superuser"))
            .try_into_assignment()
            .expect("decode");
        assert_eq!(assignment.role, None);
    }
}
