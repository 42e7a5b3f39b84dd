//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use supertodolists::adapters::auth::Argon2PasswordHasher;
use supertodolists::adapters::email::TracingEmailSender;
use supertodolists::adapters::http::{app_router, AppState, SessionCookie};
use supertodolists::config::{AuthConfig, ServerConfig};

pub const PASSWORD: &str = "correct-horse";

/// An in-memory app plus the sender that records outgoing mail.
pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<TracingEmailSender>,
}

impl TestApp {
    pub fn new() -> Self {
        let mailer = Arc::new(TracingEmailSender::new());
        let state = AppState::in_memory(
            &AuthConfig::default(),
            Arc::new(Argon2PasswordHasher::with_params(256, 1, 1)),
            mailer.clone(),
            SessionCookie::new("sessionid", 3600, false),
        );

        Self {
            router: app_router(state, &ServerConfig::default()),
            mailer,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = session {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = session {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Signs up and logs in; returns the `name=value` cookie pair.
    pub async fn signup_and_login(&self, email: &str) -> String {
        let encoded = email.replace('@', "%40");
        let response = self
            .post_form(
                "/accounts/signup",
                &format!(
                    "email={}&password={}&password_confirmation={}",
                    encoded, PASSWORD, PASSWORD
                ),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = self
            .post_form(
                "/accounts/login",
                &format!("email={}&password={}", encoded, PASSWORD),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_pair(&response).expect("login sets the session cookie")
    }

    /// Creates a list and returns its URL.
    pub async fn create_list(&self, text: &str, session: Option<&str>) -> String {
        let response = self
            .post_form("/lists/new", &format!("text={}", text), session)
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        location(&response)
    }
}

pub fn location(response: &Response) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

/// `name=value` part of the `Set-Cookie` header, if any.
pub fn session_pair(response: &Response) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    set_cookie.split(';').next().map(str::to_string)
}

pub async fn json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
