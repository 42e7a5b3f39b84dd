//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Argon2 password hashing, email/password authentication
//! - `email` - Resend API sender and a tracing-only sender
//! - `http` - axum routers, session cookie middleware
//! - `memory` - In-memory stores for tests and database-less runs
//! - `postgres` - sqlx-backed repositories and session store

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
