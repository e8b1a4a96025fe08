//! Project Commands
//!
//! Project context: stages and member directory.

use board_core::api::ApiResult;
use board_core::domain::{Project, ProjectId};

use super::{send_json, HttpApi};

/// GET /projects/{projectId}
pub async fn get_project(api: &HttpApi, project_id: &ProjectId) -> ApiResult<Project> {
    let url = api.url(&["projects", project_id.as_str()]);
    send_json(api.client.get(url)).await
}
