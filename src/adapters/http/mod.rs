//! HTTP adapters - axum routers for the pages and the item API.
//!
//! Each area has its own module with DTOs, handlers and routes; `app`
//! assembles them behind the session middleware.

pub mod accounts;
pub mod app;
pub mod cookies;
pub mod dto;
pub mod lists;
pub mod middleware;

pub use app::{app_router, routes, AppState};
pub use cookies::SessionCookie;
