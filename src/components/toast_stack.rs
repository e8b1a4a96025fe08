//! Toast Stack Component
//!
//! Renders board notices; each toast dismisses itself after the configured
//! timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use board_core::{Notice, NoticeLevel};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn Toast(notice: Notice) -> impl IntoView {
    let store = use_app_store();
    let id = notice.id;
    let timeout = store.board().read_untracked().config().notice_timeout_ms;

    spawn_local(async move {
        TimeoutFuture::new(timeout).await;
        store.board().write().dismiss_notice(id);
    });

    let class = match notice.level {
        NoticeLevel::Error => "toast error",
        NoticeLevel::Info => "toast info",
    };

    view! {
        <div class=class role="alert">
            <span class="toast-message">{notice.message}</span>
            <button class="toast-close" on:click=move |_| store.board().write().dismiss_notice(id)>"×"</button>
        </div>
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();
    let notices = Memo::new(move |_| store.board().read().notices().iter().cloned().collect::<Vec<Notice>>());

    view! {
        <div class="toast-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice /> }
            />
        </div>
    }
}
