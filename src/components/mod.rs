//! UI Components
//!
//! Thin Leptos wrappers around the packing store operations.

mod add_item_form;
mod clear_list_button;
mod logo;
mod packing_list_view;
mod packing_row;
mod sort_select;
mod stats_footer;

pub use add_item_form::AddItemForm;
pub use clear_list_button::ClearListButton;
pub use logo::Logo;
pub use packing_list_view::PackingListView;
pub use packing_row::PackingRow;
pub use sort_select::SortSelect;
pub use stats_footer::StatsFooter;
