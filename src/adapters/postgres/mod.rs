//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresUserRepository` - Users by id and email
//! - `PostgresListRepository` - Lists, first-item creation and sharing
//! - `PostgresItemRepository` - Items in creation order
//! - `PostgresListReader` - List summaries for the "my lists" page
//! - `PostgresSessionStore` - Login sessions keyed by token digest
//!
//! The schema lives in `migrations/` and is applied with `sqlx::migrate!`.

mod constraints;
mod item_repository;
mod list_reader;
mod list_repository;
mod session_store;
mod user_repository;

pub use item_repository::PostgresItemRepository;
pub use list_reader::PostgresListReader;
pub use list_repository::PostgresListRepository;
pub use session_store::PostgresSessionStore;
pub use user_repository::PostgresUserRepository;
