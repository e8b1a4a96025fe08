//! Collaborator Contract
//!
//! The narrow REST surface the board consumes. Implementations live outside
//! the core (HTTP in the front-end, in-memory for tests).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Deliverable, DeliverableId, ItemId, Project, ProjectId, WorkItem};
use super::patch::{DeliverablePatch, WorkItemPatch};

/// Common result type for collaborator calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`BoardApi`] implementations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Remote board API
///
/// Futures are not required to be `Send`: the board runs on a single
/// event loop (browser or a current-thread runtime).
#[async_trait(?Send)]
pub trait BoardApi {
    /// Project context: stages and member directory
    async fn get_project(&self, project_id: &ProjectId) -> ApiResult<Project>;

    /// Full list of work items for the project
    async fn list_work_items(&self, project_id: &ProjectId) -> ApiResult<Vec<WorkItem>>;

    /// Partial update of a single work item; returns the server's copy
    async fn patch_work_item(
        &self,
        project_id: &ProjectId,
        item_id: &ItemId,
        patch: &WorkItemPatch,
    ) -> ApiResult<WorkItem>;

    async fn delete_work_item(&self, project_id: &ProjectId, item_id: &ItemId) -> ApiResult<()>;

    async fn list_deliverables(&self, project_id: &ProjectId) -> ApiResult<Vec<Deliverable>>;

    async fn patch_deliverable(
        &self,
        project_id: &ProjectId,
        deliverable_id: &DeliverableId,
        patch: &DeliverablePatch,
    ) -> ApiResult<Deliverable>;
}
