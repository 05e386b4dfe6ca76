//! Dashboard data access.
//!
//! Handlers reach data only through [`DashboardStore`]. `PgDashboardStore`
//! is the Postgres implementation over the repositories in `crate::db`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::fmt;
use studydesk_core::{TaskId, UserId};
use studydesk_platform_access::Role;

use crate::db::{QuestionRepository, TaskRepository, UserRepository};

/// Longest task title accepted from the dashboard, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Errors from the dashboard store.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying database failed.
    Database { operation: &'static str, details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database { operation, details } => {
                write!(f, "{operation} failed: {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Result of a dashboard store operation.
pub type StoreResult<T> = studydesk_core::Result<T, StoreError>;

/// A user and the role they currently hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub user_id: UserId,
    pub display_name: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Why a submitted task was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    TitleTooLong { len: usize },
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { len } => {
                write!(f, "title is {len} characters, at most {MAX_TITLE_LEN} allowed")
            }
        }
    }
}

impl std::error::Error for TaskValidationError {}

/// A validated task submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
}

impl NewTask {
    /// Trims and validates a task submission. A blank description is dropped.
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let len = title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(TaskValidationError::TitleTooLong { len });
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            title: title.to_string(),
            description,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task record from a validated submission.
    #[must_use]
    pub fn from_new(new_task: NewTask, created_by: UserId) -> Self {
        Self {
            id: TaskId::new(),
            title: new_task.title,
            description: new_task.description,
            created_by,
            created_at: Utc::now(),
        }
    }
}

/// Data operations behind the admin dashboard.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Lists every user with their current role.
    async fn list_role_assignments(&self) -> StoreResult<Vec<RoleAssignment>>;

    /// Sets a user's role. Returns false if the user does not exist.
    async fn assign_role(&self, user_id: UserId, role: Role) -> StoreResult<bool>;

    /// Persists a new task authored by `created_by`.
    async fn create_task(
        &self,
        new_task: NewTask,
        created_by: UserId,
    ) -> StoreResult<Task>;

    /// Counts questions still waiting for an answer.
    async fn count_pending_questions(&self) -> StoreResult<i64>;
}

/// Postgres-backed dashboard store.
pub struct PgDashboardStore {
    users: UserRepository,
    tasks: TaskRepository,
    questions: QuestionRepository,
}

impl PgDashboardStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            questions: QuestionRepository::new(pool),
        }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| StoreError::Database {
        operation,
        details: e.to_string(),
    }
}

#[async_trait]
impl DashboardStore for PgDashboardStore {
    async fn list_role_assignments(&self) -> StoreResult<Vec<RoleAssignment>> {
        Ok(self
            .users
            .list_role_assignments()
            .await
            .map_err(database_error("list role assignments"))?)
    }

    async fn assign_role(&self, user_id: UserId, role: Role) -> StoreResult<bool> {
        Ok(self
            .users
            .set_role(user_id, role)
            .await
            .map_err(database_error("assign role"))?)
    }

    async fn create_task(
        &self,
        new_task: NewTask,
        created_by: UserId,
    ) -> StoreResult<Task> {
        let task = Task::from_new(new_task, created_by);
        self.tasks
            .create(&task)
            .await
            .map_err(database_error("create task"))?;
        Ok(task)
    }

    async fn count_pending_questions(&self) -> StoreResult<i64> {
        Ok(self
            .questions
            .count_pending()
            .await
            .map_err(database_error("count pending questions"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let task = NewTask::new("  Week 3 reading  ", None).expect("valid");
        assert_eq!(task.title(), "Week 3 reading");
        assert_eq!(task.description(), None);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(NewTask::new("   ", None), Err(TaskValidationError::EmptyTitle));
        assert_eq!(NewTask::new("", Some("body")), Err(TaskValidationError::EmptyTitle));
    }

    #[test]
    fn title_length_counts_characters() {
        let at_limit = "é".repeat(MAX_TITLE_LEN);
        assert!(NewTask::new(&at_limit, None).is_ok());

        let over = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            NewTask::new(&over, None),
            Err(TaskValidationError::TitleTooLong {
                len: MAX_TITLE_LEN + 1
            })
        );
    }

    #[test]
    fn blank_description_becomes_none() {
        let task = NewTask::new("Quiz", Some("  \n ")).expect("valid");
        assert_eq!(task.description(), None);

        let task = NewTask::new("Quiz", Some(" ten questions ")).expect("valid");
        assert_eq!(task.description(), Some("ten questions"));
    }

    #[test]
    fn store_errors_propagate_into_store_result() {
        fn count() -> StoreResult<i64> {
            let failed: Result<i64, StoreError> = Err(StoreError::Database {
                operation: "count pending questions",
                details: "timeout".to_string(),
            });
            Ok(failed?)
        }

        let report = count().expect_err("should fail");
        assert!(report.to_string().contains("count pending questions failed"));
    }

    #[test]
    fn task_from_new_keeps_author() {
        let author = UserId::new();
        let task = Task::from_new(NewTask::new("Essay", None).expect("valid"), author);
        assert_eq!(task.created_by, author);
        assert_eq!(task.title, "Essay");
        assert!(task.id.to_string().starts_with("task_"));
    }
}
