//! Project Board Frontend App
//!
//! Main application component: header, fetch status, board and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::BoardConfig;

use crate::components::{BoardView, FetchStatus, ToastStack};
use crate::context::AppContext;
use crate::store::{store_refresh, AppState, AppStateStoreFields};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(ctx);
    let store = Store::new(AppState::new(config));
    provide_context(store);

    // Load the board on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] loading board, trigger={}", trigger);
        store_refresh(store);
    });

    let title = move || {
        store
            .board()
            .read()
            .project()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Board".to_string())
    };
    let summary = move || {
        let board = store.board().read();
        format!("{} items, {} stages", board.items().len(), board.stages().len())
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{title}</h1>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
            </header>

            <FetchStatus />

            <BoardView />

            <p class="item-count">{summary}</p>

            <ToastStack />
        </div>
    }
}
