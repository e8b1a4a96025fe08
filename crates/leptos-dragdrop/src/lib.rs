//! Leptos DragDrop Utilities
//!
//! Pointer-driven drag-and-drop for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag.
//!
//! This crate only tracks input-level state (pending press, lifted id,
//! last hovered target). It reports abstract `start / over / end / cancel`
//! events through [`DragCallbacks`]; the caller owns the drag session.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of a draggable item or a drop target
pub type DragId = String;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop (ms)
const CLICK_SUPPRESS_MS: i32 = 100;

/// Abstract drag events reported to the caller
#[derive(Clone, Copy)]
pub struct DragCallbacks {
    /// Item lifted past the threshold. Return false to refuse the drag.
    pub on_start: Callback<DragId, bool>,
    /// Hovered target changed (None = left every target)
    pub on_over: Callback<Option<DragId>>,
    /// Released: (source, hovered target)
    pub on_end: Callback<(DragId, Option<DragId>)>,
    /// Escape pressed or window lost focus mid-drag
    pub on_cancel: Callback<()>,
}

/// DnD input state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Pressed but not yet moved past the threshold
    pending: RwSignal<Option<DragId>>,
    /// Currently dragged id
    lifted: RwSignal<Option<DragId>>,
    /// Last target reported through `on_over`
    hovered: RwSignal<Option<DragId>>,
    /// Press position for movement detection
    start: RwSignal<(i32, i32)>,
    just_ended: RwSignal<bool>,
    threshold_px: i32,
    callbacks: DragCallbacks,
}

pub fn create_dnd_signals(callbacks: DragCallbacks, threshold_px: i32) -> DndSignals {
    DndSignals {
        pending: RwSignal::new(None),
        lifted: RwSignal::new(None),
        hovered: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
        just_ended: RwSignal::new(false),
        threshold_px: threshold_px.max(0),
        callbacks,
    }
}

impl DndSignals {
    /// Reactive: is any item being dragged
    pub fn is_dragging(&self) -> bool {
        self.lifted.with(Option::is_some)
    }

    /// True for a short moment after a drop, so click handlers can ignore
    /// the click that ends a drag
    pub fn drag_just_ended(&self) -> bool {
        self.just_ended.get_untracked()
    }

    fn set_hovered(&self, target: Option<DragId>) {
        if self.hovered.get_untracked() != target {
            self.hovered.set(target.clone());
            self.callbacks.on_over.run(target);
        }
    }

    fn reset(&self) {
        self.pending.set(None);
        self.lifted.set(None);
        self.hovered.set(None);
    }
}

/// Clear drag state and briefly suppress clicks
fn end_drag(dnd: &DndSignals) {
    dnd.reset();
    dnd.just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Abort an active drag without a drop
pub fn cancel_drag(dnd: &DndSignals) {
    let was_dragging = dnd.lifted.get_untracked().is_some();
    dnd.reset();
    if was_dragging {
        dnd.callbacks.on_cancel.run(());
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: DragId) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        if dnd.lifted.get_untracked().is_some() {
            return;
        }
        dnd.pending.set(Some(item_id.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Point the drag at `target_id`. Returns false when nothing is lifted or
/// the target is the dragged card itself.
fn claim_target(dnd: &DndSignals, target_id: &str) -> bool {
    match dnd.lifted.get_untracked() {
        Some(dragging) if dragging != target_id => {
            dnd.set_hovered(Some(target_id.to_string()));
            true
        }
        _ => false,
    }
}

/// The pointer is over no drop target
fn release_target(dnd: &DndSignals) {
    if dnd.lifted.get_untracked().is_some() {
        dnd.set_hovered(None);
    }
}

/// Create mouseover handler for drop targets (containers and cards)
///
/// The innermost target wins: propagation stops once a target claims the
/// pointer. The dragged card itself does not claim it, so hovering your own
/// card reports the container underneath.
pub fn make_on_target_mouseover(dnd: DndSignals, target_id: DragId) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if claim_target(&dnd, &target_id) {
            ev.stop_propagation();
        }
    }
}

/// Create mouseover handler for the space around drop targets (board
/// padding, gaps between columns). Targets stop propagation, so this only
/// sees the pointer when no target holds it.
pub fn make_on_background_mouseover(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| release_target(&dnd)
}

/// Create mouseleave handler for the outer drag area
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| release_target(&dnd)
}

fn on_global_mousemove(dnd: DndSignals, ev: web_sys::MouseEvent) {
    let Some(pending) = dnd.pending.get_untracked() else { return; };
    if dnd.lifted.get_untracked().is_some() {
        return;
    }
    let (start_x, start_y) = dnd.start.get_untracked();
    let dx = (ev.client_x() - start_x).abs();
    let dy = (ev.client_y() - start_y).abs();

    // Start dragging if moved beyond threshold
    if dx > dnd.threshold_px || dy > dnd.threshold_px {
        dnd.pending.set(None);
        if dnd.callbacks.on_start.run(pending.clone()) {
            dnd.lifted.set(Some(pending));
        }
    }
}

/// (source, hovered target) of the drag being released, if any
fn drop_request(dnd: &DndSignals) -> Option<(DragId, Option<DragId>)> {
    let source = dnd.lifted.get_untracked()?;
    Some((source, dnd.hovered.get_untracked()))
}

fn on_global_mouseup(dnd: DndSignals) {
    match drop_request(&dnd) {
        Some(request) => {
            end_drag(&dnd);
            dnd.callbacks.on_end.run(request);
        }
        None => {
            // Not dragging - click event will fire naturally on the element
            dnd.pending.set(None);
        }
    }
}

/// Bind the document/window listeners that drive a drag:
/// mousemove (threshold), mouseup (drop), Escape and window blur (cancel)
pub fn bind_global_listeners(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let Some(win) = web_sys::window() else { return; };
    let Some(doc) = win.document() else { return; };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        on_global_mousemove(dnd, ev);
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        on_global_mouseup(dnd);
    });
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            cancel_drag(&dnd);
        }
    });
    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        cancel_drag(&dnd);
    });

    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());

    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
    on_blur.forget();
}
