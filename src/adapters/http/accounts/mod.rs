//! HTTP adapter for account endpoints.
//!
//! - `GET/POST /accounts/signup` - Register with email and password
//! - `GET/POST /accounts/login` - Open a session and set the session cookie
//! - `GET /accounts/logout` - Revoke the session and clear the cookie

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{LoginForm, SignupForm};
pub use routes::{accounts_routes, logout_routes};
