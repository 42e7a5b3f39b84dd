//! HTTP handlers for account endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::app::AppState;
use crate::adapters::http::dto::{ErrorResponse, FormResponse};
use crate::application::handlers::LogoutCommand;
use crate::adapters::http::middleware::presented_token;
use crate::domain::user::AccountError;

use super::dto::{LoginForm, SignupForm};

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /accounts/signup - Empty sign-up form
pub async fn signup_form() -> Response {
    (StatusCode::OK, Json(SignupForm::default().rendered())).into_response()
}

/// POST /accounts/signup - Register, then go home
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    let rendered = form.rendered();

    match state.signup_handler().handle(form.into()).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => handle_account_error(rendered, e),
    }
}

/// GET /accounts/login - Empty login form
pub async fn login_form() -> Response {
    (StatusCode::OK, Json(LoginForm::default().rendered())).into_response()
}

/// POST /accounts/login - Authenticate and set the session cookie
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let rendered = form.rendered();

    match state.login_handler().handle(form.into()).await {
        Ok(result) => (
            [(header::SET_COOKIE, state.session_cookie.issue(&result.token))],
            Redirect::to("/"),
        )
            .into_response(),
        Err(e) => handle_account_error(rendered, e),
    }
}

/// GET /accounts/logout - Revoke the session and clear the cookie
///
/// Takes the token straight from the request so an expired or revoked one
/// still logs out cleanly.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cmd = LogoutCommand {
        token: presented_token(&headers, &state.session_cookie),
    };
    state.logout_handler().handle(cmd).await;

    (
        [(header::SET_COOKIE, state.session_cookie.clear())],
        Redirect::to("/"),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_account_error(form: FormResponse, error: AccountError) -> Response {
    let form = match error {
        AccountError::ValidationFailed { field, message } => form.with_error(field, message),
        AccountError::EmailTaken => form.with_error("email", error.message()),
        AccountError::InvalidCredentials => {
            form.with_error(FormResponse::NON_FIELD, error.message())
        }
        AccountError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "account request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response();
        }
    };

    (StatusCode::BAD_REQUEST, Json(form)).into_response()
}
