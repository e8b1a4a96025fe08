//! Card List Component
//!
//! The cards inside one container, in store order.

use leptos::prelude::*;

use board_core::domain::{ItemId, MediaId, MemberId, WorkItem};
use leptos_dragdrop::DndSignals;

use crate::components::WorkItemCard;

/// Re-render a card whenever a displayed field changes
fn card_key(item: &WorkItem) -> (ItemId, String, Option<String>, Option<MemberId>, Vec<MemberId>, Vec<MediaId>) {
    (
        item.id.clone(),
        item.name.clone(),
        item.description.clone(),
        item.in_charge.clone(),
        item.assignees.clone(),
        item.linked_media.clone(),
    )
}

#[component]
pub fn CardList(
    items: Signal<Vec<WorkItem>>,
    dnd: DndSignals,
) -> impl IntoView {
    view! {
        <div class="card-list">
            <For
                each=move || items.get()
                key=card_key
                children=move |item| view! { <WorkItemCard item=item dnd=dnd /> }
            />
            <Show when=move || items.with(Vec::is_empty)>
                <div class="card-list-empty">"Drop items here"</div>
            </Show>
        </div>
    }
}
