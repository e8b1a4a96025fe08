//! Deliverable Commands
//!
//! Used to keep deliverable -> task back-links in sync.

use board_core::api::{ApiResult, DeliverablePatch};
use board_core::domain::{Deliverable, DeliverableId, ProjectId};

use super::{send_json, HttpApi};

pub async fn list_deliverables(api: &HttpApi, project_id: &ProjectId) -> ApiResult<Vec<Deliverable>> {
    let url = api.url(&["projects", project_id.as_str(), "deliverables"]);
    send_json(api.client.get(url)).await
}

pub async fn patch_deliverable(
    api: &HttpApi,
    project_id: &ProjectId,
    deliverable_id: &DeliverableId,
    patch: &DeliverablePatch,
) -> ApiResult<Deliverable> {
    let url = api.url(&["projects", project_id.as_str(), "deliverables", deliverable_id.as_str()]);
    send_json(api.client.patch(url).json(patch)).await
}
