//! Task repository.

use sqlx::PgPool;

use crate::store::Task;

/// Repository for task operations.
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Creates a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new task.
    pub async fn create(&self, task: &Task) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(task.description.as_deref())
        .bind(task.created_by.to_string())
        .bind(task.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
