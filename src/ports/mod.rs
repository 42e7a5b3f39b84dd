//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Registered users, looked up by id or email
//! - `ListRepository` - Lists and their sharing relation
//! - `ItemRepository` - Items, in creation order
//! - `ListReader` - List summaries for overview pages
//!
//! ## Authentication Ports
//!
//! - `PasswordHasher` - Salted password hashing
//! - `AuthenticationBackend` - Credentials to user
//! - `SessionStore` - Login sessions behind the session cookie
//!
//! ## Messaging Ports
//!
//! - `EmailSender` - Transactional email

mod authentication_backend;
mod email_sender;
mod item_repository;
mod list_reader;
mod list_repository;
mod password_hasher;
mod session_store;
mod user_repository;

pub use authentication_backend::{AuthenticationBackend, Credentials};
pub use email_sender::{EmailSender, OutboundEmail};
pub use item_repository::ItemRepository;
pub use list_reader::{ListReader, ListSummary};
pub use list_repository::ListRepository;
pub use password_hasher::PasswordHasher;
pub use session_store::SessionStore;
pub use user_repository::UserRepository;
