//! UI Components
//!
//! Leptos components for the item list page.

mod item_list;

pub use item_list::ItemListView;
