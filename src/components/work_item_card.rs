//! Work Item Card Component
//!
//! A draggable card. Also a drop target for same-column reordering.

use leptos::prelude::*;

use board_core::domain::{MediaId, WorkItem};
use leptos_dragdrop::{make_on_mousedown, make_on_target_mouseover, DndSignals};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_commit, use_app_store, AppStateStoreFields};

#[component]
pub fn WorkItemCard(
    item: WorkItem,
    dnd: DndSignals,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let id = item.id.clone();

    // Resolve owner/assignee display data from the member directory
    let (in_charge, assignees) = {
        let board = store.board().read_untracked();
        let project = board.project();
        (
            project.and_then(|p| p.in_charge_of(&item)).map(|m| m.name.clone()),
            project
                .map(|p| p.assignees_of(&item).iter().map(|m| (m.initials(), m.name.clone())).collect::<Vec<_>>())
                .unwrap_or_default(),
        )
    };

    let is_dragging = {
        let id = id.clone();
        move || store.board().read().session().is_active(&id)
    };
    let card_class = move || {
        let mut c = String::from("card");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    let on_delete = {
        let id = id.clone();
        Callback::new(move |_: ()| {
            let pending = store.board().write().remove_item(&id);
            if let Some(pending) = pending {
                store_commit(store, ctx, pending);
            }
        })
    };

    // One chip per linked media asset, each with an unlink button
    let media_chips = item
        .linked_media
        .iter()
        .cloned()
        .map(|media_id| {
            let id = id.clone();
            let remaining: Vec<MediaId> = item.linked_media.iter().filter(|m| **m != media_id).cloned().collect();
            view! {
                <span class="media-chip">
                    {media_id.to_string()}
                    <button
                        class="media-unlink-btn"
                        title="Unlink"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            let pending = store.board().write().set_linked_media(&id, remaining.clone());
                            if let Some(pending) = pending {
                                store_commit(store, ctx, pending);
                            }
                        }
                    >
                        "×"
                    </button>
                </span>
            }
        })
        .collect_view();

    let description = item.description.clone().filter(|d| !d.is_empty());

    view! {
        <div
            class=card_class
            on:mousedown=make_on_mousedown(dnd, id.to_string())
            on:mouseover=make_on_target_mouseover(dnd, id.to_string())
        >
            <div class="card-header">
                <span class="card-kind">{item.kind.as_str()}</span>
                <span class="card-title">{item.name.clone()}</span>
                <DeleteConfirmButton on_confirm=on_delete />
            </div>

            {description.map(|d| view! { <p class="card-description">{d}</p> })}

            <div class="card-footer">
                {in_charge.map(|name| view! { <span class="card-owner">{name}</span> })}
                <span class="card-assignees">
                    {assignees
                        .into_iter()
                        .map(|(initials, name)| view! { <span class="avatar" title=name>{initials}</span> })
                        .collect_view()}
                </span>
            </div>

            <div class="card-media">{media_chips}</div>
        </div>
    }
}
