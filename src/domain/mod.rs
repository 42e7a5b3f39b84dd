//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth types)
//! - `list` - Lists, items, sharing and the item uniqueness rule
//! - `user` - Email-identified accounts, passwords and session tokens

pub mod foundation;
pub mod list;
pub mod user;
