//! HTTP middleware for axum.
//!
//! - `auth` - Session middleware and extractors

pub mod auth;

pub use auth::{
    auth_middleware, presented_token, AuthRejection, AuthState, OptionalAuth, RequireAuth,
};
