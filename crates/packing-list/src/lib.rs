//! Packing List Core
//!
//! The item-list reducer (add/delete/toggle/clear) and the derived views
//! (sort projection, packing summary) behind the Far Away UI.
//!
//! Every operation takes the current [`PackingList`] snapshot and returns a
//! new one. Holders replace their snapshot wholesale after each call.

mod confirm;
mod error;
mod item;
mod list;
mod sort;
mod store;
mod summary;

#[cfg(test)]
mod tests;

pub use confirm::Confirm;
pub use error::{ListError, ListResult};
pub use item::{IdAllocator, Item, ItemDraft, ItemId};
pub use list::PackingList;
pub use sort::{sorted_view, CaseFoldCollator, Collator, SortKey};
pub use store::{PackingListActions, PackingListStore};
pub use summary::{stats, Summary};
