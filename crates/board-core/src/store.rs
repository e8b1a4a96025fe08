//! Work Item Store
//!
//! The board's cached copy of the remote work item list. The remote API is
//! the source of truth; this cache is reconciled by refetch or by optimistic
//! patches.

use log::{debug, warn};

use crate::api::{ApiError, WorkItemPatch};
use crate::domain::{find_by_id, find_by_id_mut, position_by_id, ItemId, WorkItem};

/// State of the most recent list fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; the previous list is kept
    Failed(String),
}

/// Identifies one fetch; only the newest ticket may write the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct WorkItemStore {
    items: Vec<WorkItem>,
    fetch: FetchState,
    issued: u64,
    stale: bool,
}

impl WorkItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<WorkItem>) -> Self {
        Self {
            items,
            fetch: FetchState::Loaded,
            ..Default::default()
        }
    }

    /// Current snapshot
    pub fn get(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn find(&self, id: &ItemId) -> Option<&WorkItem> {
        find_by_id(&self.items, id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        position_by_id(&self.items, id)
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// True once `invalidate` has been called and no fetch has landed since
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replace the whole list
    pub fn set(&mut self, items: Vec<WorkItem>) {
        self.items = items;
        self.stale = false;
    }

    /// Apply a partial update to one item. Returns false if it is gone.
    pub fn patch(&mut self, id: &ItemId, patch: &WorkItemPatch) -> bool {
        match find_by_id_mut(&mut self.items, id) {
            Some(item) => {
                patch.apply_to(item);
                true
            }
            None => false,
        }
    }

    /// Replace an item with the server's copy, keeping its place in the list
    pub fn upsert(&mut self, item: WorkItem) {
        match find_by_id_mut(&mut self.items, &item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<WorkItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Remove the element at `from` and reinsert it at `to`
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Mark the cache as needing a refetch
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.fetch = FetchState::Loading;
        FetchTicket(self.issued)
    }

    /// Land a fetch result. Results from superseded tickets are dropped.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<WorkItem>, ApiError>) -> bool {
        if ticket.0 != self.issued {
            debug!("dropping superseded fetch {} (latest {})", ticket.0, self.issued);
            return false;
        }
        match result {
            Ok(items) => {
                debug!("fetched {} work items", items.len());
                self.set(items);
                self.fetch = FetchState::Loaded;
            }
            Err(e) => {
                warn!("work item fetch failed: {}", e);
                self.fetch = FetchState::Failed(e.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &WorkItemStore) -> Vec<String> {
        store.get().iter().map(|i| i.id.to_string()).collect()
    }

    fn store() -> WorkItemStore {
        WorkItemStore::with_items(vec![
            WorkItem::new("t1", "A"),
            WorkItem::new("t2", "B"),
            WorkItem::new("t3", "C"),
        ])
    }

    #[test]
    fn test_move_item_is_remove_then_insert() {
        let mut s = store();
        assert!(s.move_item(0, 2));
        assert_eq!(ids(&s), vec!["t2", "t3", "t1"]);
        assert!(s.move_item(2, 0));
        assert_eq!(ids(&s), vec!["t1", "t2", "t3"]);
        assert!(!s.move_item(0, 3));
    }

    #[test]
    fn test_patch_missing_item_is_noop() {
        let mut s = store();
        assert!(!s.patch(&ItemId::from("gone"), &WorkItemPatch::stage(None)));
        assert_eq!(s.get().len(), 3);
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut s = store();
        s.upsert(WorkItem::new("t2", "B2"));
        assert_eq!(ids(&s), vec!["t1", "t2", "t3"]);
        assert_eq!(s.find(&ItemId::from("t2")).unwrap().name, "B2");
        s.upsert(WorkItem::new("t4", "D"));
        assert_eq!(s.get().len(), 4);
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut s = WorkItemStore::new();
        let first = s.begin_fetch();
        let second = s.begin_fetch();
        assert!(s.finish_fetch(second, Ok(vec![WorkItem::new("new", "N")])));
        assert!(!s.finish_fetch(first, Ok(vec![WorkItem::new("old", "O")])));
        assert_eq!(ids(&s), vec!["new"]);
        assert_eq!(s.fetch_state(), &FetchState::Loaded);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_list() {
        let mut s = store();
        s.invalidate();
        let ticket = s.begin_fetch();
        s.finish_fetch(ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(s.get().len(), 3);
        assert!(s.is_stale());
        assert!(matches!(s.fetch_state(), FetchState::Failed(msg) if msg.contains("offline")));
    }
}
