//! Fetch Status Component
//!
//! Loading indicator and the retry affordance for failed board fetches.

use leptos::prelude::*;

use board_core::FetchState;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FetchStatus() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = Memo::new(move |_| store.board().read().fetch_state().clone());
    let is_empty = Memo::new(move |_| store.board().read().items().is_empty());

    view! {
        {move || match state.get() {
            FetchState::Loading if is_empty.get() => {
                view! { <div class="fetch-status loading">"Loading board…"</div> }.into_any()
            }
            FetchState::Failed(message) => {
                view! {
                    <div class="fetch-status error">
                        <span>{format!("Could not load the board: {}", message)}</span>
                        <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                }.into_any()
            }
            _ => view! { <div class="fetch-status"></div> }.into_any(),
        }}
    }
}
