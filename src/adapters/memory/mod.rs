//! In-memory adapters.
//!
//! Lock-protected maps behind the persistence and session ports. Used by the
//! test suite and by the database-less development mode
//! (`database.in_memory = true`). Nothing survives a restart.

mod list_store;
mod session_store;
mod user_repository;

pub use list_store::InMemoryListStore;
pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
