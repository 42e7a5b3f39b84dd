//! List domain module.
//!
//! Lists and their items. A list is created together with its first item
//! (`List::create_new`), takes its display name from that item, and can be
//! shared with registered users other than its owner.

mod aggregate;
mod errors;
mod item;

pub use aggregate::List;
pub use errors::ListError;
pub use item::{Item, DUPLICATE_ITEM_ERROR, EMPTY_ITEM_ERROR};
