//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod accounts;
pub mod lists;

pub use accounts::{
    LoginCommand, LoginHandler, LoginResult, LogoutCommand, LogoutHandler, SignupCommand,
    SignupHandler, SignupResult,
};
pub use lists::{
    AddItemCommand, AddItemHandler, CreateListCommand, CreateListHandler, CreateListResult,
    DeleteListCommand, DeleteListHandler, ListDetail, ListItemsHandler, ListItemsQuery, MyLists,
    MyListsHandler, MyListsQuery, ShareListCommand, ShareListHandler, SharedListSummary,
    ViewListHandler, ViewListQuery,
};
