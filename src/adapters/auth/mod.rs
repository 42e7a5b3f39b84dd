//! Authentication adapters.
//!
//! Implementations of the `PasswordHasher` and `AuthenticationBackend` ports:
//!
//! - `argon2_hasher` - Argon2id password hashing
//! - `email_backend` - Email lookup plus password verification

mod argon2_hasher;
mod email_backend;

pub use argon2_hasher::Argon2PasswordHasher;
pub use email_backend::EmailAuthenticationBackend;
