//! HTTP adapter for list endpoints.
//!
//! Pages:
//! - `POST /lists/new` - Start a list from its first item
//! - `GET/POST /lists/:id/` - View a list, append an item
//! - `POST /lists/:id/share` - Share with a registered user
//! - `POST /lists/:id/delete` - Owner deletes the list
//! - `GET /lists/users/:email/` - Lists owned by and shared with a user
//!
//! JSON API:
//! - `GET/POST /api/lists/:id/items/` - Items of a list, append an item

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::{item_api_routes, lists_routes};
