//! Item List Component
//!
//! Fetches the item list once on mount and renders it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::{ViewState, FETCH_ERROR_MESSAGE};

/// Titled list of item names, with a red error line when the fetch fails.
///
/// The heading and the list render in every state; a failed fetch adds the
/// error line above the (then empty) list.
#[component]
pub fn ItemListView() -> impl IntoView {
    let (state, set_state) = signal(ViewState::new());

    // Flipped on unmount so a late response is discarded instead of written
    // into a disposed scope.
    let cancelled = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let cancelled = cancelled.clone();
        move || cancelled.store(true, Ordering::SeqCst)
    });

    // Fetch once on mount. The effect reads no signals, so it never reruns.
    Effect::new(move |_| {
        let cancelled = cancelled.clone();
        set_state.update(|s| s.on_fetch_start());
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[ItemListView] loaded {} items", items.len()).into(),
                    );
                    if !cancelled.load(Ordering::SeqCst) {
                        set_state.update(|s| s.on_fetch_success(items));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ItemListView] fetch failed: {}", e).into(),
                    );
                    if !cancelled.load(Ordering::SeqCst) {
                        set_state.update(|s| s.on_fetch_failure(FETCH_ERROR_MESSAGE));
                    }
                }
            }
        });
    });

    view! {
        <h1>"Items List"</h1>
        {move || state.get().error.map(|message| view! {
            <p class="fetch-error" style="color: red;">{message}</p>
        })}
        <ul class="item-list">
            <For
                each=move || state.get().items
                key=|item| item.id
                children=move |item| view! { <li>{item.name}</li> }
            />
        </ul>
    }
}
