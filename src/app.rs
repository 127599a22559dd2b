//! Item List App
//!
//! Root component: page shell around the item list.

use leptos::prelude::*;

use crate::components::ItemListView;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <ItemListView />
        </div>
    }
}
