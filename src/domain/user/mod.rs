//! User domain module.
//!
//! Email-identified accounts, password rules and login session tokens.

mod aggregate;
mod email;
mod errors;
mod password;
mod session_token;

pub use aggregate::User;
pub use email::{Email, MAX_EMAIL_LENGTH};
pub use errors::{AccountError, EMAIL_TAKEN_ERROR, INVALID_LOGIN_ERROR};
pub use password::{HashedPassword, PasswordPolicy};
pub use session_token::{SessionToken, SESSION_TOKEN_LENGTH};
