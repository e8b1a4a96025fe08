//! Board View Component
//!
//! The drag-and-drop board: unplaced panel plus one column per stage.
//! Wires the pointer adapter to the board's drag controller.

use leptos::prelude::*;

use board_core::domain::ItemId;
use leptos_dragdrop::*;

use crate::components::{StageColumn, UnplacedPanel};
use crate::context::use_app_context;
use crate::store::{store_commit, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let threshold = store.board().read_untracked().config().drag_threshold_px;

    let callbacks = DragCallbacks {
        on_start: Callback::new(move |id: DragId| store.board().write().drag_start(&ItemId::new(id))),
        on_over: Callback::new(move |target: Option<DragId>| store.board().write().drag_over(target)),
        on_end: Callback::new(move |(source, target): (DragId, Option<DragId>)| {
            log::debug!("[DND] drop {} on {:?}", source, target);
            let pending = store.board().write().drag_end(ItemId::new(source), target);
            if let Some(pending) = pending {
                store_commit(store, ctx, pending);
            }
        }),
        on_cancel: Callback::new(move |_: ()| store.board().write().drag_cancel()),
    };
    let dnd = create_dnd_signals(callbacks, threshold);
    bind_global_listeners(dnd);

    let layout = Memo::new(move |_| store.board().read().layout());
    let stages = move || {
        layout.with(|l| l.columns.iter().map(|c| c.stage.clone()).collect::<Vec<_>>())
    };

    view! {
        <div
            class=move || if dnd.is_dragging() { "board dragging" } else { "board" }
            on:mouseleave=make_on_mouseleave(dnd)
            on:mouseover=make_on_background_mouseover(dnd)
        >
            <UnplacedPanel dnd=dnd layout=layout />

            <div class="board-columns" on:mouseover=make_on_background_mouseover(dnd)>
                <For
                    each=stages
                    key=|stage| (stage.id.clone(), stage.name.clone(), stage.color.clone())
                    children=move |stage| {
                        view! { <StageColumn stage=stage dnd=dnd layout=layout /> }
                    }
                />
            </div>
        </div>
    }
}
