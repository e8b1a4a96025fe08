//! Work Item Entity
//!
//! A task or deliverable card placed on the board. `stage_id = None` means
//! the item sits in the unplaced panel.

use serde::{Deserialize, Serialize};
use super::entity::{DeliverableId, Entity, ItemId, MediaId, MemberId, StageId};

/// Which kind of work the card represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemKind {
    #[default]
    Task,
    Deliverable,
}

impl WorkItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemKind::Task => "task",
            WorkItemKind::Deliverable => "deliverable",
        }
    }
}

/// A work item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: WorkItemKind,
    /// Column the item belongs to (None = unplaced)
    #[serde(default)]
    pub stage_id: Option<StageId>,
    /// Single responsible person
    #[serde(default)]
    pub in_charge: Option<MemberId>,
    #[serde(default)]
    pub assignees: Vec<MemberId>,
    /// Linked media assets, in display order
    #[serde(default)]
    pub linked_media: Vec<MediaId>,
    #[serde(default)]
    pub linked_tasks: Vec<ItemId>,
    #[serde(default)]
    pub linked_deliverables: Vec<DeliverableId>,
}

impl WorkItem {
    /// Create an unplaced task with no links
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            kind: WorkItemKind::Task,
            stage_id: None,
            in_charge: None,
            assignees: Vec::new(),
            linked_media: Vec::new(),
            linked_tasks: Vec::new(),
            linked_deliverables: Vec::new(),
        }
    }

    /// Builder-style stage assignment
    pub fn in_stage(mut self, stage_id: impl Into<StageId>) -> Self {
        self.stage_id = Some(stage_id.into());
        self
    }

    pub fn is_unplaced(&self) -> bool {
        self.stage_id.is_none()
    }

    /// Whether this item references `other` through any cross-link list
    pub fn links_to(&self, other: &ItemId) -> bool {
        self.linked_tasks.contains(other)
            || self.linked_deliverables.iter().any(|d| d.as_str() == other.as_str())
    }
}

impl Entity for WorkItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_item_creation() {
        let item = WorkItem::new("t1", "Storyboard");
        assert_eq!(item.id().as_str(), "t1");
        assert!(item.is_unplaced());
        assert_eq!(item.kind, WorkItemKind::Task);
    }

    #[test]
    fn test_deserialize_with_missing_lists() {
        let json = r#"{"id":"t1","name":"Cut","stageId":"s1","kind":"deliverable"}"#;
        let item: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.stage_id, Some(StageId::from("s1")));
        assert_eq!(item.kind, WorkItemKind::Deliverable);
        assert!(item.linked_tasks.is_empty());
        assert!(item.assignees.is_empty());
    }

    #[test]
    fn test_null_stage_is_unplaced() {
        let item: WorkItem = serde_json::from_str(r#"{"id":"t1","name":"Cut","stageId":null}"#).unwrap();
        assert!(item.is_unplaced());
    }

    #[test]
    fn test_links_to() {
        let mut item = WorkItem::new("t1", "Cut");
        item.linked_tasks.push(ItemId::from("t2"));
        assert!(item.links_to(&ItemId::from("t2")));
        assert!(!item.links_to(&ItemId::from("t3")));
    }
}
