//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Account handlers
    LoginCommand, LoginHandler, LoginResult, LogoutCommand, LogoutHandler,
    SignupCommand, SignupHandler, SignupResult,
    // List handlers
    AddItemCommand, AddItemHandler, CreateListCommand, CreateListHandler, CreateListResult,
    DeleteListCommand, DeleteListHandler, ListDetail, ListItemsHandler, ListItemsQuery,
    MyLists, MyListsHandler, MyListsQuery, ShareListCommand, ShareListHandler,
    SharedListSummary, ViewListHandler, ViewListQuery,
};
