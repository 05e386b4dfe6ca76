//! In-memory fakes for router tests.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use chrono::Duration;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use studydesk_core::UserId;
use studydesk_platform_access::{
    AuthenticationError, IdentityProvider, InMemoryIdentityProvider, Role, Session, SessionId,
    SessionLookup,
};
use tokio::sync::Mutex;

use crate::app;
use crate::auth::AppState;
use crate::config::{AccessConfig, SessionConfig};
use crate::store::{DashboardStore, NewTask, RoleAssignment, StoreError, StoreResult, Task};

/// Store fake that records every call it receives.
#[derive(Default)]
pub struct RecordingStore {
    pub assignments: Mutex<Vec<RoleAssignment>>,
    pub tasks: Mutex<Vec<Task>>,
    pub pending: i64,
    pub fail: bool,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn with_pending(pending: i64) -> Self {
        Self {
            pending,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of store operations executed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, operation: &'static str) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Database {
                operation,
                details: "connection refused".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardStore for RecordingStore {
    async fn list_role_assignments(&self) -> StoreResult<Vec<RoleAssignment>> {
        self.record("list role assignments")?;
        Ok(self.assignments.lock().await.clone())
    }

    async fn assign_role(&self, user_id: UserId, role: Role) -> StoreResult<bool> {
        self.record("assign role")?;
        let mut assignments = self.assignments.lock().await;
        match assignments.iter_mut().find(|a| a.user_id == user_id) {
            Some(assignment) => {
                assignment.role = Some(role);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_task(
        &self,
        new_task: NewTask,
        created_by: UserId,
    ) -> StoreResult<Task> {
        self.record("create task")?;
        let task = Task::from_new(new_task, created_by);
        self.tasks.lock().await.push(task.clone());
        Ok(task)
    }

    async fn count_pending_questions(&self) -> StoreResult<i64> {
        self.record("count pending questions")?;
        Ok(self.pending)
    }
}

/// Identity provider whose lookups always fail.
pub struct UnreachableIdentityProvider;

#[async_trait]
impl IdentityProvider for UnreachableIdentityProvider {
    async fn get_session(
        &self,
        _id: &SessionId,
    ) -> SessionLookup {
        Err(AuthenticationError::ProviderError {
            provider: "test".to_string(),
            reason: "connection reset".to_string(),
        }
        .into())
    }
}

/// A router wired to in-memory collaborators.
pub struct TestApp {
    pub router: Router,
    pub identity: Arc<InMemoryIdentityProvider>,
    pub store: Arc<RecordingStore>,
}

impl TestApp {
    pub fn new(store: RecordingStore) -> Self {
        Self::with_access_config(store, AccessConfig::default())
    }

    pub fn with_access_config(store: RecordingStore, access_config: AccessConfig) -> Self {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let store = Arc::new(store);
        let router = build_router(identity.clone(), store.clone(), access_config);
        Self {
            router,
            identity,
            store,
        }
    }

    /// Registers a live session and returns its `Cookie` header value.
    pub async fn login(&self, role: Option<Role>) -> String {
        self.login_for(UserId::new(), role, Duration::hours(1)).await
    }

    pub async fn login_for(&self, user_id: UserId, role: Option<Role>, ttl: Duration) -> String {
        let id = format!("sess_{}", UserId::new().as_ulid());
        self.identity
            .insert(Session::new(SessionId::new(id.clone()), user_id, role, ttl))
            .await;
        format!("session={id}")
    }
}

pub fn build_router(
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DashboardStore>,
    access_config: AccessConfig,
) -> Router {
    app::router(Arc::new(AppState::new(
        identity,
        store,
        SessionConfig::default(),
        access_config,
    )))
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request")
}

pub fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
