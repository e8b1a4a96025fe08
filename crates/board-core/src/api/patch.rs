//! Partial Update Payloads
//!
//! Absent fields are left out of the JSON body. `stage_id: Some(None)`
//! serializes as an explicit `"stageId": null`.

use serde::Serialize;

use crate::domain::{Deliverable, DeliverableId, ItemId, MediaId, StageId, WorkItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<Option<StageId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_tasks: Option<Vec<ItemId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_deliverables: Option<Vec<DeliverableId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_media: Option<Vec<MediaId>>,
}

impl WorkItemPatch {
    pub fn stage(stage_id: Option<StageId>) -> Self {
        Self {
            stage_id: Some(stage_id),
            ..Default::default()
        }
    }

    pub fn linked_media(media: Vec<MediaId>) -> Self {
        Self {
            linked_media: Some(media),
            ..Default::default()
        }
    }

    /// Apply the present fields to a local copy
    pub fn apply_to(&self, item: &mut WorkItem) {
        if let Some(stage_id) = &self.stage_id {
            item.stage_id = stage_id.clone();
        }
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
        if let Some(tasks) = &self.linked_tasks {
            item.linked_tasks = tasks.clone();
        }
        if let Some(deliverables) = &self.linked_deliverables {
            item.linked_deliverables = deliverables.clone();
        }
        if let Some(media) = &self.linked_media {
            item.linked_media = media.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverablePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_tasks: Option<Vec<ItemId>>,
}

impl DeliverablePatch {
    pub fn linked_tasks(tasks: Vec<ItemId>) -> Self {
        Self {
            linked_tasks: Some(tasks),
        }
    }

    pub fn apply_to(&self, deliverable: &mut Deliverable) {
        if let Some(tasks) = &self.linked_tasks {
            deliverable.linked_tasks = tasks.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_patch_body() {
        let body = serde_json::to_value(WorkItemPatch::stage(Some(StageId::from("s1")))).unwrap();
        assert_eq!(body, json!({ "stageId": "s1" }));
    }

    #[test]
    fn test_unplace_patch_sends_explicit_null() {
        let body = serde_json::to_value(WorkItemPatch::stage(None)).unwrap();
        assert_eq!(body, json!({ "stageId": null }));
    }

    #[test]
    fn test_link_patch_body() {
        let patch = WorkItemPatch {
            linked_tasks: Some(vec![ItemId::from("t9")]),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "linkedTasks": ["t9"] }));
        assert_eq!(
            serde_json::to_value(DeliverablePatch::linked_tasks(vec![])).unwrap(),
            json!({ "linkedTasks": [] })
        );
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut item = WorkItem::new("t1", "Cut").in_stage("s1");
        item.linked_media = vec![MediaId::from("a1")];
        WorkItemPatch::stage(None).apply_to(&mut item);
        assert!(item.is_unplaced());
        assert_eq!(item.name, "Cut");
        assert_eq!(item.linked_media, vec![MediaId::from("a1")]);
    }
}
