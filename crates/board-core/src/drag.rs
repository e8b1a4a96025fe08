//! Drag Session Controller
//!
//! Idle -> Dragging(active, over) -> Idle. The only exits from Dragging are
//! `on_drag_end` (commit) and `on_drag_cancel` (discard). A second
//! `on_drag_start` while a session is active is ignored.

use log::debug;

use crate::domain::ItemId;
use crate::store::WorkItemStore;

/// Ephemeral, component-local drag state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    /// Item currently lifted
    pub active_item_id: Option<ItemId>,
    /// Container or item currently hovered
    pub over_target_id: Option<String>,
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        self.active_item_id.is_some()
    }

    pub fn is_active(&self, id: &ItemId) -> bool {
        self.active_item_id.as_ref() == Some(id)
    }

    /// Whether `target_id` is the hovered drop target
    pub fn is_over(&self, target_id: &str) -> bool {
        self.over_target_id.as_deref() == Some(target_id)
    }
}

/// The (source, target) pair captured on release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    pub source: ItemId,
    pub target: String,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Lift `item_id` if it exists in the store snapshot and no drag is active
    pub fn on_drag_start(&mut self, item_id: &ItemId, store: &WorkItemStore) -> bool {
        if self.session.is_dragging() {
            debug!("drag start {} ignored: session already active", item_id);
            return false;
        }
        if store.find(item_id).is_none() {
            debug!("drag start {} ignored: item not in store", item_id);
            return false;
        }
        debug!("drag start {}", item_id);
        self.session.active_item_id = Some(item_id.clone());
        self.session.over_target_id = None;
        true
    }

    /// Record the hovered target. Only meaningful while dragging.
    pub fn on_drag_over(&mut self, target_id: Option<String>) {
        if self.session.is_dragging() {
            self.session.over_target_id = target_id;
        }
    }

    /// Clear the session and hand back the captured pair, if there is a target
    pub fn on_drag_end(&mut self, source: ItemId, target: Option<String>) -> Option<DropRequest> {
        self.session = DragSession::default();
        match target {
            Some(target) => {
                debug!("drop {} on {}", source, target);
                Some(DropRequest { source, target })
            }
            None => {
                debug!("drop {} outside any target", source);
                None
            }
        }
    }

    pub fn on_drag_cancel(&mut self) {
        if self.session.is_dragging() {
            debug!("drag cancelled");
        }
        self.session = DragSession::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkItem;

    fn store() -> WorkItemStore {
        WorkItemStore::with_items(vec![WorkItem::new("t1", "A"), WorkItem::new("t2", "B")])
    }

    #[test]
    fn test_start_unknown_item_is_noop() {
        let mut c = DragController::new();
        assert!(!c.on_drag_start(&ItemId::from("ghost"), &store()));
        assert_eq!(c.session(), &DragSession::default());
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut c = DragController::new();
        let s = store();
        assert!(c.on_drag_start(&ItemId::from("t1"), &s));
        assert!(!c.on_drag_start(&ItemId::from("t2"), &s));
        assert!(c.session().is_active(&ItemId::from("t1")));
    }

    #[test]
    fn test_over_updates_are_idempotent() {
        let mut c = DragController::new();
        c.on_drag_start(&ItemId::from("t1"), &store());
        c.on_drag_over(Some("s1".into()));
        c.on_drag_over(Some("s1".into()));
        assert!(c.session().is_over("s1"));
        c.on_drag_over(None);
        assert_eq!(c.session().over_target_id, None);
    }

    #[test]
    fn test_over_without_drag_is_ignored() {
        let mut c = DragController::new();
        c.on_drag_over(Some("s1".into()));
        assert!(!c.session().is_over("s1"));
    }

    #[test]
    fn test_end_clears_and_returns_pair() {
        let mut c = DragController::new();
        c.on_drag_start(&ItemId::from("t1"), &store());
        c.on_drag_over(Some("s1".into()));
        let req = c.on_drag_end(ItemId::from("t1"), Some("s1".into()));
        assert_eq!(req, Some(DropRequest { source: ItemId::from("t1"), target: "s1".into() }));
        assert!(!c.session().is_dragging());
        assert_eq!(c.session().over_target_id, None);
    }

    #[test]
    fn test_end_without_target_yields_nothing() {
        let mut c = DragController::new();
        c.on_drag_start(&ItemId::from("t1"), &store());
        assert_eq!(c.on_drag_end(ItemId::from("t1"), None), None);
        assert!(!c.session().is_dragging());
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut c = DragController::new();
        let s = store();
        c.on_drag_start(&ItemId::from("t1"), &s);
        c.on_drag_over(Some("t2".into()));
        c.on_drag_cancel();
        assert_eq!(c.session(), &DragSession::default());
        // a fresh drag may start after cancel
        assert!(c.on_drag_start(&ItemId::from("t2"), &s));
    }
}
