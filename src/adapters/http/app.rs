//! Application state and the assembled router.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::auth::EmailAuthenticationBackend;
use crate::adapters::memory::{InMemoryListStore, InMemorySessionStore, InMemoryUserRepository};
use crate::application::handlers::{
    AddItemHandler, CreateListHandler, DeleteListHandler, ListItemsHandler, LoginHandler,
    LogoutHandler, MyListsHandler, ShareListHandler, SignupHandler, ViewListHandler,
};
use crate::config::{AuthConfig, ServerConfig};
use crate::domain::user::PasswordPolicy;
use crate::ports::{
    AuthenticationBackend, EmailSender, ItemRepository, ListReader, ListRepository,
    PasswordHasher, SessionStore, UserRepository,
};

use super::accounts::{accounts_routes, logout_routes};
use super::cookies::SessionCookie;
use super::lists::{item_api_routes, lists_routes};
use super::middleware::{auth_middleware, AuthState, OptionalAuth};

// ════════════════════════════════════════════════════════════════════════════
// Shared state
// ════════════════════════════════════════════════════════════════════════════

/// Ports shared by every HTTP handler. Application handlers are built on demand.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub lists: Arc<dyn ListRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub list_reader: Arc<dyn ListReader>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub auth_backend: Arc<dyn AuthenticationBackend>,
    pub sessions: Arc<dyn SessionStore>,
    pub mailer: Arc<dyn EmailSender>,
    pub password_policy: PasswordPolicy,
    pub session_cookie: SessionCookie,
}

impl AppState {
    /// State backed entirely by the in-memory adapters.
    pub fn in_memory(
        auth: &AuthConfig,
        hasher: Arc<dyn PasswordHasher>,
        mailer: Arc<dyn EmailSender>,
        session_cookie: SessionCookie,
    ) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let store = Arc::new(InMemoryListStore::new());
        let auth_backend = Arc::new(EmailAuthenticationBackend::new(
            users.clone(),
            hasher.clone(),
        ));

        Self {
            users,
            lists: store.clone(),
            items: store.clone(),
            list_reader: store,
            hasher,
            auth_backend,
            sessions: Arc::new(InMemorySessionStore::new(auth.session_ttl_secs)),
            mailer,
            password_policy: PasswordPolicy::new(auth.min_password_length),
            session_cookie,
        }
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::new(self.sessions.clone(), self.session_cookie.clone())
    }

    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(
            self.users.clone(),
            self.hasher.clone(),
            self.mailer.clone(),
            self.password_policy,
        )
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.auth_backend.clone(), self.sessions.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone())
    }

    pub fn create_list_handler(&self) -> CreateListHandler {
        CreateListHandler::new(self.lists.clone())
    }

    pub fn add_item_handler(&self) -> AddItemHandler {
        AddItemHandler::new(self.lists.clone(), self.items.clone())
    }

    pub fn view_list_handler(&self) -> ViewListHandler {
        ViewListHandler::new(self.lists.clone(), self.items.clone(), self.users.clone())
    }

    pub fn list_items_handler(&self) -> ListItemsHandler {
        ListItemsHandler::new(self.lists.clone(), self.items.clone())
    }

    pub fn my_lists_handler(&self) -> MyListsHandler {
        MyListsHandler::new(self.list_reader.clone(), self.users.clone())
    }

    pub fn share_list_handler(&self) -> ShareListHandler {
        ShareListHandler::new(self.lists.clone(), self.users.clone())
    }

    pub fn delete_list_handler(&self) -> DeleteListHandler {
        DeleteListHandler::new(self.lists.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Home
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct HomeResponse {
    user: Option<String>,
    new_list_url: &'static str,
    my_lists_url: Option<String>,
}

/// Bytes left alone in a path segment: unreserved characters and `@`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'@');

/// Path of the "my lists" page for `email`.
pub fn my_lists_path(email: &str) -> String {
    format!("/lists/users/{}/", utf8_percent_encode(email, PATH_SEGMENT))
}

/// GET / - Who is logged in, and where to start a list
async fn home(OptionalAuth(user): OptionalAuth) -> Response {
    let response = HomeResponse {
        my_lists_url: user.as_ref().map(|u| my_lists_path(&u.email)),
        user: user.map(|u| u.email),
        new_list_url: "/lists/new",
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════

/// Routes with the session middleware, without the outer tower layers.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .nest("/accounts", accounts_routes())
        .nest("/lists", lists_routes())
        .nest("/api/lists", item_api_routes())
        .layer(middleware::from_fn_with_state(
            state.auth_state(),
            auth_middleware,
        ))
        .merge(logout_routes())
        .with_state(state)
}

/// The complete application: routes plus tracing, request ids, timeout and CORS.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    routes(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins).allow_credentials(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::Argon2PasswordHasher;
    use crate::adapters::email::TracingEmailSender;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::in_memory(
            &AuthConfig::default(),
            Arc::new(Argon2PasswordHasher::with_params(256, 1, 1)),
            Arc::new(TracingEmailSender::new()),
            SessionCookie::new("sessionid", 60, false),
        )
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_shows_anonymous_visitor() {
        let response = app_router(state(), &ServerConfig::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert!(body["user"].is_null());
        assert_eq!(body["new_list_url"], "/lists/new");
    }

    #[test]
    fn my_lists_path_escapes_reserved_characters() {
        assert_eq!(
            my_lists_path("edith@example.com"),
            "/lists/users/edith@example.com/"
        );
        assert_eq!(
            my_lists_path("a/b?c#d%e f+g@example.com"),
            "/lists/users/a%2Fb%3Fc%23d%25e%20f%2Bg@example.com/"
        );
    }

    #[tokio::test]
    async fn home_link_reaches_my_lists_for_unusual_email() {
        let state = state();
        let email = "a/b?c#d%e+f@example.com";
        let user = AuthenticatedUser::new(UserId::new(), email);
        let token = state.sessions.create(&user).await.unwrap();
        let cookie = format!("sessionid={}", token.as_str());
        let app = routes(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json(response).await;
        assert_eq!(body["user"], email);
        let url = body["my_lists_url"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(url.as_str())
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = app_router(state(), &ServerConfig::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = routes(state())
            .oneshot(
                Request::builder()
                    .uri("/nothing-here")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn app_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<AppState>();
    }
}
