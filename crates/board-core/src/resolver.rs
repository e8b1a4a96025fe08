//! Move Resolver
//!
//! Classifies a drop target and turns a (source, target) pair into a
//! [`MovePlan`]. Classification priority: unplaced panel, then stage column,
//! then another item. Anything else is ignored.

use std::fmt;

use log::debug;

use crate::api::{DeliverablePatch, WorkItemPatch};
use crate::domain::{find_by_id, find_by_id_mut, position_by_id, Deliverable, DeliverableId, ItemId, Stage, StageId, WorkItem};
use crate::mutation::RemoteCall;
use crate::store::WorkItemStore;

/// Drop target id registered by the unplaced ("my items") panel
pub const UNPLACED_PANEL_ID: &str = "unplaced";

/// Drop target kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The holding area for items without a stage
    UnplacedPanel,
    /// A stage column
    Column(StageId),
    /// Another card
    Item(ItemId),
}

impl DropTarget {
    pub fn classify(raw: &str, stages: &[Stage], items: &[WorkItem]) -> Option<Self> {
        if raw == UNPLACED_PANEL_ID {
            return Some(DropTarget::UnplacedPanel);
        }
        if let Some(stage) = stages.iter().find(|s| s.id.as_str() == raw) {
            return Some(DropTarget::Column(stage.id.clone()));
        }
        items
            .iter()
            .find(|i| i.id.as_str() == raw)
            .map(|i| DropTarget::Item(i.id.clone()))
    }

    /// The id a container or card registers for hit-testing
    pub fn target_id(&self) -> &str {
        match self {
            DropTarget::UnplacedPanel => UNPLACED_PANEL_ID,
            DropTarget::Column(id) => id.as_str(),
            DropTarget::Item(id) => id.as_str(),
        }
    }
}

/// Why a drop produced no change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownSource,
    UnknownTarget,
    AlreadyUnplaced,
    AlreadyInStage,
    /// Item dropped on an item in another column (or on an unplaced item)
    DifferentStages,
    SameItem,
}

/// What a drop will do
#[derive(Debug, Clone, PartialEq)]
pub enum MovePlan {
    Ignore(IgnoreReason),
    /// Local-only reorder within one column (flat list indices)
    Reorder {
        item_id: ItemId,
        target_id: ItemId,
        from: usize,
        to: usize,
    },
    /// Move to a stage column
    Assign { item_id: ItemId, stage_id: StageId },
    /// Move to the unplaced panel and sever every back-link to the item
    Unplace {
        item_id: ItemId,
        item_links: Vec<(ItemId, WorkItemPatch)>,
        deliverable_links: Vec<(DeliverableId, DeliverablePatch)>,
    },
}

impl fmt::Display for MovePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovePlan::Ignore(reason) => write!(f, "ignored ({:?})", reason),
            MovePlan::Reorder { item_id, target_id, .. } => write!(f, "reorder {} to {}", item_id, target_id),
            MovePlan::Assign { item_id, stage_id } => write!(f, "move {} to {}", item_id, stage_id),
            MovePlan::Unplace { item_id, .. } => write!(f, "unplace {}", item_id),
        }
    }
}

/// Read-only view of the caches a drop is resolved against
pub struct MoveResolver<'a> {
    stages: &'a [Stage],
    items: &'a [WorkItem],
    deliverables: &'a [Deliverable],
}

impl<'a> MoveResolver<'a> {
    pub fn new(stages: &'a [Stage], items: &'a [WorkItem], deliverables: &'a [Deliverable]) -> Self {
        Self {
            stages,
            items,
            deliverables,
        }
    }

    pub fn resolve(&self, source_id: &ItemId, raw_target: &str) -> MovePlan {
        let Some(source) = find_by_id(self.items, source_id) else {
            return MovePlan::Ignore(IgnoreReason::UnknownSource);
        };
        let plan = match DropTarget::classify(raw_target, self.stages, self.items) {
            None => MovePlan::Ignore(IgnoreReason::UnknownTarget),
            Some(DropTarget::UnplacedPanel) => self.unplace(source),
            Some(DropTarget::Column(stage_id)) => {
                if source.stage_id.as_ref() == Some(&stage_id) {
                    MovePlan::Ignore(IgnoreReason::AlreadyInStage)
                } else {
                    MovePlan::Assign {
                        item_id: source.id.clone(),
                        stage_id,
                    }
                }
            }
            Some(DropTarget::Item(target_id)) => self.reorder(source, &target_id),
        };
        debug!("resolved drop {} on {}: {}", source_id, raw_target, plan);
        plan
    }

    fn unplace(&self, source: &WorkItem) -> MovePlan {
        if source.is_unplaced() {
            return MovePlan::Ignore(IgnoreReason::AlreadyUnplaced);
        }
        let id = &source.id;

        let item_links = self
            .items
            .iter()
            .filter(|other| other.id != *id && other.links_to(id))
            .map(|other| {
                let mut patch = WorkItemPatch::default();
                if other.linked_tasks.contains(id) {
                    patch.linked_tasks = Some(other.linked_tasks.iter().filter(|t| *t != id).cloned().collect());
                }
                if other.linked_deliverables.iter().any(|d| d.as_str() == id.as_str()) {
                    patch.linked_deliverables = Some(
                        other
                            .linked_deliverables
                            .iter()
                            .filter(|d| d.as_str() != id.as_str())
                            .cloned()
                            .collect(),
                    );
                }
                (other.id.clone(), patch)
            })
            .collect();

        let deliverable_links = self
            .deliverables
            .iter()
            .filter(|d| d.linked_tasks.contains(id))
            .map(|d| {
                let remaining = d.linked_tasks.iter().filter(|t| *t != id).cloned().collect();
                (d.id.clone(), DeliverablePatch::linked_tasks(remaining))
            })
            .collect();

        MovePlan::Unplace {
            item_id: id.clone(),
            item_links,
            deliverable_links,
        }
    }

    fn reorder(&self, source: &WorkItem, target_id: &ItemId) -> MovePlan {
        if &source.id == target_id {
            return MovePlan::Ignore(IgnoreReason::SameItem);
        }
        let Some(to) = position_by_id(self.items, target_id) else {
            return MovePlan::Ignore(IgnoreReason::UnknownTarget);
        };
        let target = &self.items[to];
        match (&source.stage_id, &target.stage_id) {
            (Some(a), Some(b)) if a == b => {}
            _ => return MovePlan::Ignore(IgnoreReason::DifferentStages),
        }
        let Some(from) = position_by_id(self.items, &source.id) else {
            return MovePlan::Ignore(IgnoreReason::UnknownSource);
        };
        MovePlan::Reorder {
            item_id: source.id.clone(),
            target_id: target_id.clone(),
            from,
            to,
        }
    }
}

impl MovePlan {
    /// Whether the plan needs a network call
    pub fn is_remote(&self) -> bool {
        matches!(self, MovePlan::Assign { .. } | MovePlan::Unplace { .. })
    }

    /// Patch the local caches so the UI reflects the move immediately
    pub fn apply_optimistic(&self, store: &mut WorkItemStore, deliverables: &mut [Deliverable]) {
        match self {
            MovePlan::Ignore(_) => {}
            MovePlan::Reorder { from, to, .. } => {
                store.move_item(*from, *to);
            }
            MovePlan::Assign { item_id, stage_id } => {
                store.patch(item_id, &WorkItemPatch::stage(Some(stage_id.clone())));
            }
            MovePlan::Unplace {
                item_id,
                item_links,
                deliverable_links,
            } => {
                store.patch(item_id, &WorkItemPatch::stage(None));
                for (id, patch) in item_links {
                    store.patch(id, patch);
                }
                for (id, patch) in deliverable_links {
                    if let Some(d) = find_by_id_mut(deliverables, id) {
                        patch.apply_to(d);
                    }
                }
            }
        }
    }

    /// Remote calls in issue order: the moved item first, then link fan-out
    pub fn remote_calls(&self) -> Vec<RemoteCall> {
        match self {
            MovePlan::Ignore(_) | MovePlan::Reorder { .. } => Vec::new(),
            MovePlan::Assign { item_id, stage_id } => vec![RemoteCall::PatchItem {
                id: item_id.clone(),
                patch: WorkItemPatch::stage(Some(stage_id.clone())),
            }],
            MovePlan::Unplace {
                item_id,
                item_links,
                deliverable_links,
            } => {
                let mut calls = vec![RemoteCall::PatchItem {
                    id: item_id.clone(),
                    patch: WorkItemPatch::stage(None),
                }];
                calls.extend(item_links.iter().map(|(id, patch)| RemoteCall::PatchItem {
                    id: id.clone(),
                    patch: patch.clone(),
                }));
                calls.extend(deliverable_links.iter().map(|(id, patch)| RemoteCall::PatchDeliverable {
                    id: id.clone(),
                    patch: patch.clone(),
                }));
                calls
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> Vec<Stage> {
        vec![Stage::new("s1", "Draft", 0), Stage::new("s2", "Review", 1)]
    }

    fn ids(items: &[WorkItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_classify_priority() {
        // an item whose id collides with a stage id still classifies as a column
        let items = vec![WorkItem::new("s1", "odd"), WorkItem::new("t1", "A")];
        let st = stages();
        assert_eq!(DropTarget::classify(UNPLACED_PANEL_ID, &st, &items), Some(DropTarget::UnplacedPanel));
        assert_eq!(DropTarget::classify("s1", &st, &items), Some(DropTarget::Column("s1".into())));
        assert_eq!(DropTarget::classify("t1", &st, &items), Some(DropTarget::Item("t1".into())));
        assert_eq!(DropTarget::classify("zzz", &st, &items), None);
    }

    #[test]
    fn test_assign_to_new_column() {
        let items = vec![WorkItem::new("t1", "A")];
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t1".into(), "s1");
        assert_eq!(plan, MovePlan::Assign { item_id: "t1".into(), stage_id: "s1".into() });
        assert_eq!(plan.remote_calls().len(), 1);
    }

    #[test]
    fn test_same_column_is_noop() {
        let items = vec![WorkItem::new("t1", "A").in_stage("s1")];
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t1".into(), "s1");
        assert_eq!(plan, MovePlan::Ignore(IgnoreReason::AlreadyInStage));
        assert!(plan.remote_calls().is_empty());
    }

    #[test]
    fn test_unplace_already_unplaced_is_noop() {
        let items = vec![WorkItem::new("t1", "A")];
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t1".into(), UNPLACED_PANEL_ID);
        assert_eq!(plan, MovePlan::Ignore(IgnoreReason::AlreadyUnplaced));
    }

    #[test]
    fn test_cross_column_item_drop_is_noop() {
        let items = vec![WorkItem::new("t1", "A").in_stage("s1"), WorkItem::new("t2", "B").in_stage("s2")];
        let mut store = WorkItemStore::with_items(items.clone());
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t1".into(), "t2");
        assert_eq!(plan, MovePlan::Ignore(IgnoreReason::DifferentStages));
        plan.apply_optimistic(&mut store, &mut []);
        assert_eq!(store.get(), items.as_slice());
    }

    #[test]
    fn test_item_drop_between_unplaced_items_is_noop() {
        let items = vec![WorkItem::new("t1", "A"), WorkItem::new("t2", "B")];
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t1".into(), "t2");
        assert_eq!(plan, MovePlan::Ignore(IgnoreReason::DifferentStages));
    }

    #[test]
    fn test_reorder_preserves_column_set() {
        let items = vec![
            WorkItem::new("t1", "A").in_stage("s1"),
            WorkItem::new("x", "X").in_stage("s2"),
            WorkItem::new("t2", "B").in_stage("s1"),
            WorkItem::new("t3", "C").in_stage("s1"),
        ];
        let mut store = WorkItemStore::with_items(items.clone());
        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&"t3".into(), "t1");
        assert!(!plan.is_remote());
        plan.apply_optimistic(&mut store, &mut []);

        let column: Vec<&str> = store
            .get()
            .iter()
            .filter(|i| i.stage_id == Some("s1".into()))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(column, vec!["t3", "t1", "t2"]);
        assert_eq!(store.get().len(), 4);
        assert!(store.get().iter().all(|i| items.iter().any(|o| o == i)));
    }

    #[test]
    fn test_unplace_strips_backlinks() {
        let mut other = WorkItem::new("t5", "E").in_stage("s2");
        other.linked_tasks = vec!["t1".into(), "t7".into()];
        let items = vec![WorkItem::new("t1", "A").in_stage("s1"), other];
        let mut deliverables = vec![
            Deliverable::new("d1", "Trailer").with_tasks(["t1", "t9"]),
            Deliverable::new("d2", "Poster").with_tasks(["t1"]),
            Deliverable::new("d3", "Teaser").with_tasks(["t4"]),
        ];
        let mut store = WorkItemStore::with_items(items.clone());

        let plan = MoveResolver::new(&stages(), &items, &deliverables).resolve(&"t1".into(), UNPLACED_PANEL_ID);
        plan.apply_optimistic(&mut store, &mut deliverables);

        assert!(store.find(&"t1".into()).unwrap().is_unplaced());
        assert_eq!(store.find(&"t5".into()).unwrap().linked_tasks, vec![ItemId::from("t7")]);
        assert_eq!(deliverables[0].linked_tasks, vec![ItemId::from("t9")]);
        assert!(deliverables[1].linked_tasks.is_empty());
        assert_eq!(deliverables[2].linked_tasks, vec![ItemId::from("t4")]);
        // item patch first, then t5, then d1 and d2
        assert_eq!(plan.remote_calls().len(), 4);
        assert_eq!(ids(store.get()), vec!["t1", "t5"]);
    }

    #[test]
    fn test_unknown_source_is_ignored() {
        let plan = MoveResolver::new(&stages(), &[], &[]).resolve(&"ghost".into(), "s1");
        assert_eq!(plan, MovePlan::Ignore(IgnoreReason::UnknownSource));
    }
}
