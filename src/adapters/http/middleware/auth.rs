//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that resolves the session and injects the user into extensions
//! - `RequireAuth` - Extractor that requires a logged-in user
//! - `OptionalAuth` - Extractor for pages that work with or without one
//!
//! # Architecture
//!
//! The middleware only talks to the `SessionStore` port, so the Postgres and
//! in-memory stores behave the same from a handler's point of view.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth / OptionalAuth read from extensions
//! ```
//!
//! Two token sources are accepted:
//! - the session cookie, set by the login form; an unknown or expired cookie
//!   is ignored and the request continues anonymously
//! - `Authorization: Bearer <token>`; an unknown or expired bearer token is
//!   rejected with 401
//!
//! Logout is mounted outside this layer and reads the token with
//! `presented_token`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::cookies::SessionCookie;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::SessionToken;
use crate::ports::SessionStore;

/// Auth middleware state.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionStore>,
    pub cookie: SessionCookie,
}

impl AuthState {
    pub fn new(sessions: Arc<dyn SessionStore>, cookie: SessionCookie) -> Self {
        Self { sessions, cookie }
    }
}

/// Where the token of the current request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenSource {
    Bearer,
    Cookie,
}

/// Token carried by the request, bearer header first, then the cookie.
fn presented(headers: &HeaderMap, cookie: &SessionCookie) -> Option<(SessionToken, TokenSource)> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(SessionToken::from_raw);

    match bearer {
        Some(token) => Some((token, TokenSource::Bearer)),
        None => cookie.read(headers).map(|token| (token, TokenSource::Cookie)),
    }
}

/// Token carried by the request without checking it against the store.
///
/// Used by logout, which must work for stale tokens too.
pub fn presented_token(headers: &HeaderMap, cookie: &SessionCookie) -> Option<SessionToken> {
    presented(headers, cookie).map(|(token, _)| token)
}

/// Session middleware.
///
/// On success the `AuthenticatedUser` is inserted into request extensions.
/// Without a usable token the request continues anonymously, except for a
/// bad bearer token (401) and an unavailable session store (503).
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some((token, source)) = presented(request.headers(), &state.cookie) else {
        return next.run(request).await;
    };

    match state.sessions.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) if e.requires_reauthentication() && source == TokenSource::Cookie => {
            tracing::debug!(error = %e, "ignoring stale session cookie");
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

fn auth_error_response(error: &AuthError) -> Response {
    let (status, message) = match error {
        AuthError::SessionExpired => (StatusCode::UNAUTHORIZED, "Session expired"),
        AuthError::InvalidSession => (StatusCode::UNAUTHORIZED, "Invalid session"),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Session store unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
        _ => (StatusCode::UNAUTHORIZED, "Authentication failed"),
    };

    (
        status,
        Json(serde_json::json!({
            "error": message,
            "code": "AUTH_ERROR"
        })),
    )
        .into_response()
}

/// Extractor that requires a logged-in user.
///
/// If the auth middleware did not resolve a session, returns 401 Unauthorized.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Extractor for optional authentication.
///
/// Anonymous visitors may create and use lists, so most list pages take this
/// instead of `RequireAuth`.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> axum::extract::FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user = parts.extensions.get::<AuthenticatedUser>().cloned();
            Ok(OptionalAuth(user))
        })
    }
}

impl OptionalAuth {
    pub fn user_id(&self) -> Option<crate::domain::foundation::UserId> {
        self.0.as_ref().map(|u| u.id)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid session was presented.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
