//! Work Item Commands
//!
//! Frontend bindings for the task endpoints.

use board_core::api::{ApiResult, WorkItemPatch};
use board_core::domain::{ItemId, ProjectId, WorkItem};

use super::{send_empty, send_json, HttpApi};

pub async fn list_work_items(api: &HttpApi, project_id: &ProjectId) -> ApiResult<Vec<WorkItem>> {
    let url = api.url(&["projects", project_id.as_str(), "tasks"]);
    send_json(api.client.get(url)).await
}

/// PATCH with only the fields present in `patch`
pub async fn patch_work_item(
    api: &HttpApi,
    project_id: &ProjectId,
    item_id: &ItemId,
    patch: &WorkItemPatch,
) -> ApiResult<WorkItem> {
    let url = api.url(&["projects", project_id.as_str(), "tasks", item_id.as_str()]);
    send_json(api.client.patch(url).json(patch)).await
}

pub async fn delete_work_item(api: &HttpApi, project_id: &ProjectId, item_id: &ItemId) -> ApiResult<()> {
    let url = api.url(&["projects", project_id.as_str(), "tasks", item_id.as_str()]);
    send_empty(api.client.delete(url)).await
}
