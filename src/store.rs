//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the board state. The board itself is
//! plain data from `board-core`; these helpers run its async halves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use board_core::{fetch_snapshot, Board, BoardConfig, PendingMutation, SettleAction};

use crate::commands::HttpApi;
use crate::context::AppContext;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Project, work items, deliverables, drag session and notices
    pub board: Board,
}

impl AppState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn api_for(store: &AppStore) -> (HttpApi, BoardConfig) {
    let config = store.board().read_untracked().config().clone();
    (HttpApi::from_config(&config), config)
}

/// Fetch project, items and deliverables and land them in the store
pub fn store_refresh(store: AppStore) {
    let ticket = store.board().write().begin_refresh();
    let (api, config) = api_for(&store);
    spawn_local(async move {
        let result = fetch_snapshot(&api, &config.project_id).await;
        if let Err(e) = &result {
            log::warn!("board refresh failed: {}", e);
        }
        store.board().write().finish_refresh(ticket, result);
    });
}

/// Send a mutation whose optimistic patch is already applied, then settle it
pub fn store_commit(store: AppStore, ctx: AppContext, pending: PendingMutation) {
    let (api, _) = api_for(&store);
    log::debug!("[SYNC] {} ({} calls)", pending.label(), pending.calls().len());
    spawn_local(async move {
        let outcome = pending.send(&api).await;
        let action = store.board().write().settle(outcome);
        if action == SettleAction::Refetch {
            ctx.reload();
        }
    });
}
