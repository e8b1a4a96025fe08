//! In-Memory Backend
//!
//! A seeded [`BoardApi`] that records every call. Used as the stub
//! collaborator in tests; failures can be injected per entity.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Deliverable, DeliverableId, ItemId, Project, ProjectId, WorkItem};
use super::patch::{DeliverablePatch, WorkItemPatch};
use super::traits::{ApiError, ApiResult, BoardApi};

/// A recorded collaborator call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    GetProject,
    ListWorkItems,
    PatchWorkItem(ItemId, WorkItemPatch),
    DeleteWorkItem(ItemId),
    ListDeliverables,
    PatchDeliverable(DeliverableId, DeliverablePatch),
}

impl ApiCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ApiCall::PatchWorkItem(..) | ApiCall::DeleteWorkItem(_) | ApiCall::PatchDeliverable(..)
        )
    }
}

#[derive(Default)]
struct State {
    project: Option<Project>,
    items: Vec<WorkItem>,
    deliverables: Vec<Deliverable>,
    calls: Vec<ApiCall>,
    failing: HashSet<String>,
    fail_fetches: bool,
}

#[derive(Default)]
pub struct InMemoryApi {
    state: Mutex<State>,
}

fn injected() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "injected failure".to_string(),
    }
}

impl InMemoryApi {
    pub fn new(project: Project, items: Vec<WorkItem>, deliverables: Vec<Deliverable>) -> Self {
        Self {
            state: Mutex::new(State {
                project: Some(project),
                items,
                deliverables,
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state().calls.clone()
    }

    /// Only the calls that would change server state
    pub fn mutations(&self) -> Vec<ApiCall> {
        self.state().calls.iter().filter(|c| c.is_mutation()).cloned().collect()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Make every mutation targeting `id` (item or deliverable) fail
    pub fn fail_entity(&self, id: &str) {
        self.state().failing.insert(id.to_string());
    }

    pub fn set_fail_fetches(&self, fail: bool) {
        self.state().fail_fetches = fail;
    }

    pub fn items(&self) -> Vec<WorkItem> {
        self.state().items.clone()
    }

    pub fn deliverables(&self) -> Vec<Deliverable> {
        self.state().deliverables.clone()
    }

    fn check_project(state: &State, project_id: &ProjectId) -> ApiResult<()> {
        match &state.project {
            Some(p) if &p.id == project_id => Ok(()),
            _ => Err(ApiError::NotFound(format!("project {}", project_id))),
        }
    }
}

#[async_trait(?Send)]
impl BoardApi for InMemoryApi {
    async fn get_project(&self, project_id: &ProjectId) -> ApiResult<Project> {
        let mut state = self.state();
        state.calls.push(ApiCall::GetProject);
        if state.fail_fetches {
            return Err(injected());
        }
        Self::check_project(&state, project_id)?;
        state.project.clone().ok_or_else(|| ApiError::NotFound(project_id.to_string()))
    }

    async fn list_work_items(&self, project_id: &ProjectId) -> ApiResult<Vec<WorkItem>> {
        let mut state = self.state();
        state.calls.push(ApiCall::ListWorkItems);
        if state.fail_fetches {
            return Err(injected());
        }
        Self::check_project(&state, project_id)?;
        Ok(state.items.clone())
    }

    async fn patch_work_item(
        &self,
        project_id: &ProjectId,
        item_id: &ItemId,
        patch: &WorkItemPatch,
    ) -> ApiResult<WorkItem> {
        let mut state = self.state();
        state.calls.push(ApiCall::PatchWorkItem(item_id.clone(), patch.clone()));
        Self::check_project(&state, project_id)?;
        if state.failing.contains(item_id.as_str()) {
            return Err(injected());
        }
        let item = state
            .items
            .iter_mut()
            .find(|i| &i.id == item_id)
            .ok_or_else(|| ApiError::NotFound(format!("item {}", item_id)))?;
        patch.apply_to(item);
        Ok(item.clone())
    }

    async fn delete_work_item(&self, project_id: &ProjectId, item_id: &ItemId) -> ApiResult<()> {
        let mut state = self.state();
        state.calls.push(ApiCall::DeleteWorkItem(item_id.clone()));
        Self::check_project(&state, project_id)?;
        if state.failing.contains(item_id.as_str()) {
            return Err(injected());
        }
        let before = state.items.len();
        state.items.retain(|i| &i.id != item_id);
        if state.items.len() == before {
            return Err(ApiError::NotFound(format!("item {}", item_id)));
        }
        Ok(())
    }

    async fn list_deliverables(&self, project_id: &ProjectId) -> ApiResult<Vec<Deliverable>> {
        let mut state = self.state();
        state.calls.push(ApiCall::ListDeliverables);
        if state.fail_fetches {
            return Err(injected());
        }
        Self::check_project(&state, project_id)?;
        Ok(state.deliverables.clone())
    }

    async fn patch_deliverable(
        &self,
        project_id: &ProjectId,
        deliverable_id: &DeliverableId,
        patch: &DeliverablePatch,
    ) -> ApiResult<Deliverable> {
        let mut state = self.state();
        state.calls.push(ApiCall::PatchDeliverable(deliverable_id.clone(), patch.clone()));
        Self::check_project(&state, project_id)?;
        if state.failing.contains(deliverable_id.as_str()) {
            return Err(injected());
        }
        let deliverable = state
            .deliverables
            .iter_mut()
            .find(|d| &d.id == deliverable_id)
            .ok_or_else(|| ApiError::NotFound(format!("deliverable {}", deliverable_id)))?;
        patch.apply_to(deliverable);
        Ok(deliverable.clone())
    }
}
