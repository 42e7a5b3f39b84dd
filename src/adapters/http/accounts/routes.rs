//! HTTP routes for account endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::app::AppState;

use super::handlers::{login, login_form, logout, signup, signup_form};

/// Creates the account router, mounted at `/accounts`.
pub fn accounts_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
}

/// Creates the logout router. It sits outside the session middleware.
pub fn logout_routes() -> Router<AppState> {
    Router::new().route("/accounts/logout", get(logout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::adapters::auth::Argon2PasswordHasher;
    use crate::adapters::email::TracingEmailSender;
    use crate::adapters::http::app::routes;
    use crate::adapters::http::cookies::SessionCookie;
    use crate::config::AuthConfig;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::ports::SessionStore;

    fn state(mailer: Arc<TracingEmailSender>) -> AppState {
        AppState::in_memory(
            &AuthConfig::default(),
            Arc::new(Argon2PasswordHasher::with_params(256, 1, 1)),
            mailer,
            SessionCookie::new("sessionid", 60, false),
        )
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn signup_redirects_home_and_sends_welcome_email() {
        let mailer = Arc::new(TracingEmailSender::new());
        let app = routes(state(mailer.clone()));

        let response = app
            .oneshot(form(
                "/accounts/signup",
                "email=edith%40example.com&password=s3cretpass&password_confirmation=s3cretpass",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(mailer.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn signup_with_mismatched_passwords_is_400() {
        let app = routes(state(Arc::new(TracingEmailSender::new())));

        let response = app
            .oneshot(form(
                "/accounts/signup",
                "email=edith%40example.com&password=s3cretpass&password_confirmation=different",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_with_unknown_user_is_400() {
        let app = routes(state(Arc::new(TracingEmailSender::new())));

        let response = app
            .oneshot(form(
                "/accounts/login",
                "email=nobody%40example.com&password=whatever1",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn logout_clears_cookie_even_when_anonymous() {
        let app = routes(state(Arc::new(TracingEmailSender::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn logout_with_revoked_bearer_token_still_clears_cookie() {
        let app = routes(state(Arc::new(TracingEmailSender::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/logout")
                    .header(header::AUTHORIZATION, "Bearer revoked")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn logout_revokes_bearer_session() {
        let state = state(Arc::new(TracingEmailSender::new()));
        let user = AuthenticatedUser::new(UserId::new(), "edith@example.com");
        let token = state.sessions.create(&user).await.unwrap();
        let app = routes(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/logout")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token.as_str()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(state.sessions.validate(&token).await.is_err());
    }

    #[tokio::test]
    async fn signup_form_is_served() {
        let app = routes(state(Arc::new(TracingEmailSender::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
