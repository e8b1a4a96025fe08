//! Unplaced Panel Component
//!
//! Side panel holding items without a stage ("My items").

use leptos::prelude::*;

use board_core::{BoardLayout, UNPLACED_PANEL_ID};
use leptos_dragdrop::{make_on_target_mouseover, DndSignals};

use crate::components::CardList;

#[component]
pub fn UnplacedPanel(
    dnd: DndSignals,
    layout: Memo<BoardLayout>,
) -> impl IntoView {
    let items = Signal::derive(move || layout.with(|l| l.unplaced.items.clone()));
    let is_drop_target = move || layout.with(|l| l.unplaced.is_drop_target);

    view! {
        <aside
            class=move || if is_drop_target() { "unplaced-panel drop-target" } else { "unplaced-panel" }
            on:mouseover=make_on_target_mouseover(dnd, UNPLACED_PANEL_ID.to_string())
        >
            <header class="unplaced-panel-header">
                <span class="stage-name">"My items"</span>
                <span class="stage-count">{move || items.with(Vec::len)}</span>
            </header>
            <CardList items=items dnd=dnd />
        </aside>
    }
}
