//! Stage Column Component
//!
//! One board column. Registers the stage id as a drop target; the highlight
//! comes from the drag session's hovered target.

use leptos::prelude::*;

use board_core::domain::Stage;
use board_core::BoardLayout;
use leptos_dragdrop::{make_on_target_mouseover, DndSignals};

use crate::components::CardList;

#[component]
pub fn StageColumn(
    stage: Stage,
    dnd: DndSignals,
    layout: Memo<BoardLayout>,
) -> impl IntoView {
    let stage_id = stage.id.clone();
    let items = {
        let stage_id = stage_id.clone();
        Signal::derive(move || {
            layout.with(|l| l.column(&stage_id).map(|c| c.items.clone()).unwrap_or_default())
        })
    };
    let is_drop_target = move || {
        layout.with(|l| l.column(&stage_id).map(|c| c.is_drop_target).unwrap_or(false))
    };
    let color = stage.color.clone().unwrap_or_else(|| "#666".to_string());

    view! {
        <section
            class=move || if is_drop_target() { "stage-column drop-target" } else { "stage-column" }
            on:mouseover=make_on_target_mouseover(dnd, stage.id.to_string())
        >
            <header class="stage-column-header">
                <span class="stage-color-dot" style=format!("background-color: {};", color)></span>
                <span class="stage-name">{stage.name.clone()}</span>
                <span class="stage-count">{move || items.with(Vec::len)}</span>
            </header>
            <CardList items=items dnd=dnd />
        </section>
    }
}
