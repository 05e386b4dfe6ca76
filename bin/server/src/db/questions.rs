//! Question repository.

use sqlx::PgPool;

/// Repository for learner questions.
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    /// Creates a new question repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counts questions whose status is still `pending`.
    pub async fn count_pending(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM questions
            WHERE status = 'pending'
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }
}
