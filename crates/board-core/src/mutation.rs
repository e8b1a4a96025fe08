//! Remote Mutations
//!
//! A [`PendingMutation`] is what is left of a board operation after its
//! optimistic patch has been applied: the ordered list of remote calls.
//! Calls are issued one after another; a failing call is logged and the rest
//! still run. Nothing here serializes separate mutations against each other.

use log::{info, warn};

use crate::api::{ApiError, BoardApi, DeliverablePatch, WorkItemPatch};
use crate::domain::{Deliverable, DeliverableId, ItemId, ProjectId, WorkItem};

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    PatchItem { id: ItemId, patch: WorkItemPatch },
    PatchDeliverable { id: DeliverableId, patch: DeliverablePatch },
    DeleteItem { id: ItemId },
}

impl RemoteCall {
    /// Short description for logs and notices
    pub fn describe(&self) -> String {
        match self {
            RemoteCall::PatchItem { id, .. } => format!("update {}", id),
            RemoteCall::PatchDeliverable { id, .. } => format!("update deliverable {}", id),
            RemoteCall::DeleteItem { id } => format!("delete {}", id),
        }
    }
}

/// Server response for a successful call
#[derive(Debug, Clone, PartialEq)]
pub enum Echo {
    Item(WorkItem),
    Deliverable(Deliverable),
    Deleted(ItemId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallFailure {
    pub call: RemoteCall,
    pub error: ApiError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    project_id: ProjectId,
    label: String,
    calls: Vec<RemoteCall>,
    structural: bool,
}

impl PendingMutation {
    pub fn new(project_id: ProjectId, label: impl Into<String>, calls: Vec<RemoteCall>) -> Self {
        Self {
            project_id,
            label: label.into(),
            calls,
            structural: false,
        }
    }

    /// Mark as a structural change (the list must be refetched afterwards)
    pub fn structural(mut self) -> Self {
        self.structural = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn calls(&self) -> &[RemoteCall] {
        &self.calls
    }

    /// Issue every call in order and collect the results
    pub async fn send<A: BoardApi + ?Sized>(self, api: &A) -> MutationOutcome {
        let mut echoes = Vec::new();
        let mut failures = Vec::new();

        for call in self.calls {
            let result = match &call {
                RemoteCall::PatchItem { id, patch } => {
                    api.patch_work_item(&self.project_id, id, patch).await.map(Echo::Item)
                }
                RemoteCall::PatchDeliverable { id, patch } => api
                    .patch_deliverable(&self.project_id, id, patch)
                    .await
                    .map(Echo::Deliverable),
                RemoteCall::DeleteItem { id } => api
                    .delete_work_item(&self.project_id, id)
                    .await
                    .map(|()| Echo::Deleted(id.clone())),
            };
            match result {
                Ok(echo) => echoes.push(echo),
                Err(error) => {
                    warn!("{}: {} failed: {}", self.label, call.describe(), error);
                    failures.push(CallFailure { call, error });
                }
            }
        }

        if failures.is_empty() {
            info!("{}: {} call(s) committed", self.label, echoes.len());
        }

        MutationOutcome {
            label: self.label,
            structural: self.structural,
            echoes,
            failures,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub label: String,
    pub structural: bool,
    pub echoes: Vec<Echo>,
    pub failures: Vec<CallFailure>,
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryApi;
    use crate::domain::Project;

    fn api() -> InMemoryApi {
        InMemoryApi::new(
            Project::new("p1", "Film"),
            vec![WorkItem::new("t1", "A"), WorkItem::new("t2", "B")],
            vec![Deliverable::new("d1", "Trailer").with_tasks(["t1"])],
        )
    }

    #[tokio::test]
    async fn test_failed_call_does_not_stop_the_rest() {
        let api = api();
        api.fail_entity("t2");
        let pending = PendingMutation::new(
            "p1".into(),
            "unplace t1",
            vec![
                RemoteCall::PatchItem { id: "t2".into(), patch: WorkItemPatch::stage(None) },
                RemoteCall::PatchDeliverable { id: "d1".into(), patch: DeliverablePatch::linked_tasks(vec![]) },
            ],
        );
        let outcome = pending.send(&api).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.echoes.len(), 1);
        assert!(api.deliverables()[0].linked_tasks.is_empty());
    }

    #[tokio::test]
    async fn test_delete_echo() {
        let api = api();
        let outcome = PendingMutation::new("p1".into(), "delete t1", vec![RemoteCall::DeleteItem { id: "t1".into() }])
            .structural()
            .send(&api)
            .await;
        assert!(outcome.structural);
        assert_eq!(outcome.echoes, vec![Echo::Deleted("t1".into())]);
    }
}
