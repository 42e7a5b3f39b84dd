//! List command and query handlers.

mod add_item;
mod create_list;
mod delete_list;
mod list_items;
mod my_lists;
mod share_list;
mod view_list;

pub use add_item::{AddItemCommand, AddItemHandler};
pub use create_list::{CreateListCommand, CreateListHandler, CreateListResult};
pub use delete_list::{DeleteListCommand, DeleteListHandler};
pub use list_items::{ListItemsHandler, ListItemsQuery};
pub use my_lists::{MyLists, MyListsHandler, MyListsQuery, SharedListSummary};
pub use share_list::{ShareListCommand, ShareListHandler};
pub use view_list::{ListDetail, ViewListHandler, ViewListQuery};
