//! Guard extractors for Axum.
//!
//! `PageAccess<R>` and `ApiAccess<R>` run the same check: read the session
//! cookie, resolve it through the identity provider, and require role
//! `R::ROLE`. They differ only in how a denial is answered. Page routes
//! redirect; API routes answer `401` with a JSON error body. A denied
//! request never reaches the handler body.

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use std::marker::PhantomData;
use std::sync::Arc;
use studydesk_platform_access::{AccessGuard, AuthorizationError, Role, Session, SessionId};

use super::AppState;
use crate::error::ErrorBody;

/// Compile-time role requirement for a guarded route.
pub trait RoleRequirement: Send + Sync + 'static {
    const ROLE: Role;
}

/// Requires the admin role.
pub struct AdminRole;

impl RoleRequirement for AdminRole {
    const ROLE: Role = Role::Admin;
}

/// Page-context guard for admin routes.
pub type RequireAdminPage = PageAccess<AdminRole>;

/// API-context guard for admin routes.
pub type RequireAdminApi = ApiAccess<AdminRole>;

async fn resolve_access(
    parts: &Parts,
    state: &AppState,
    required: Role,
) -> Result<Session, AuthorizationError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let session_id = jar
        .get(&state.session_config.cookie_name)
        .map(|cookie| SessionId::new(cookie.value().to_string()));

    AccessGuard::new(required)
        .resolve(state.identity.as_ref(), session_id.as_ref())
        .await
}

/// Extractor granting access to a page route.
///
/// On denial the client is redirected to the configured fallback location.
pub struct PageAccess<R> {
    pub session: Session,
    _role: PhantomData<R>,
}

impl<S, R> FromRequestParts<S> for PageAccess<R>
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
    R: RoleRequirement,
{
    type Rejection = PageRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);

        match resolve_access(parts, &app_state, R::ROLE).await {
            Ok(session) => Ok(Self {
                session,
                _role: PhantomData,
            }),
            Err(e) => {
                tracing::debug!(error = %e, path = %parts.uri.path(), "Page access denied");
                Err(PageRejection {
                    redirect_to: app_state.access_config.denied_redirect.clone(),
                })
            }
        }
    }
}

/// Extractor granting access to an API route.
///
/// On denial the client receives `401` and `{"error":"Unauthorized"}`.
pub struct ApiAccess<R> {
    pub session: Session,
    _role: PhantomData<R>,
}

impl<S, R> FromRequestParts<S> for ApiAccess<R>
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
    R: RoleRequirement,
{
    type Rejection = ApiRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);

        match resolve_access(parts, &app_state, R::ROLE).await {
            Ok(session) => Ok(Self {
                session,
                _role: PhantomData,
            }),
            Err(e) => {
                tracing::debug!(error = %e, path = %parts.uri.path(), "API access denied");
                Err(ApiRejection)
            }
        }
    }
}

/// Rejection for page routes: a redirect away from protected markup.
#[derive(Debug)]
pub struct PageRejection {
    pub redirect_to: String,
}

impl IntoResponse for PageRejection {
    fn into_response(self) -> Response {
        Redirect::to(&self.redirect_to).into_response()
    }
}

/// Rejection for API routes.
///
/// Unauthenticated and forbidden requests are indistinguishable to the client.
#[derive(Debug)]
pub struct ApiRejection;

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "Unauthorized",
            }),
        )
            .into_response()
    }
}
