//! REST Command Wrappers
//!
//! Frontend bindings to the board's REST API, organized by resource.
//! `HttpApi` implements the core's `BoardApi` contract on top of them.

mod project;
mod work_item;
mod deliverable;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use board_core::api::{ApiError, ApiResult, BoardApi, DeliverablePatch, WorkItemPatch};
use board_core::domain::{Deliverable, DeliverableId, ItemId, Project, ProjectId, WorkItem};
use board_core::BoardConfig;

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// HTTP client bound to one API base URL
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    fn url(&self, segments: &[&str]) -> String {
        join_url(&self.base_url, segments)
    }
}

/// Append percent-encoded path segments to a base URL
pub(crate) fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    url
}

/// Map a non-success status to an `ApiError`
pub(crate) fn status_error(status: u16, body: String) -> ApiError {
    if status == 404 {
        return ApiError::NotFound(if body.is_empty() { "resource".to_string() } else { body });
    }
    ApiError::Status { status, message: body }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), body))
}

/// Send a request and decode the JSON body
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> ApiResult<T> {
    let response = request.send().await.map_err(network_error)?;
    let response = check(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request whose response body is ignored
async fn send_empty(request: reqwest::RequestBuilder) -> ApiResult<()> {
    let response = request.send().await.map_err(network_error)?;
    check(response).await.map(|_| ())
}

#[async_trait(?Send)]
impl BoardApi for HttpApi {
    async fn get_project(&self, project_id: &ProjectId) -> ApiResult<Project> {
        project::get_project(self, project_id).await
    }

    async fn list_work_items(&self, project_id: &ProjectId) -> ApiResult<Vec<WorkItem>> {
        work_item::list_work_items(self, project_id).await
    }

    async fn patch_work_item(
        &self,
        project_id: &ProjectId,
        item_id: &ItemId,
        patch: &WorkItemPatch,
    ) -> ApiResult<WorkItem> {
        work_item::patch_work_item(self, project_id, item_id, patch).await
    }

    async fn delete_work_item(&self, project_id: &ProjectId, item_id: &ItemId) -> ApiResult<()> {
        work_item::delete_work_item(self, project_id, item_id).await
    }

    async fn list_deliverables(&self, project_id: &ProjectId) -> ApiResult<Vec<Deliverable>> {
        deliverable::list_deliverables(self, project_id).await
    }

    async fn patch_deliverable(
        &self,
        project_id: &ProjectId,
        deliverable_id: &DeliverableId,
        patch: &DeliverablePatch,
    ) -> ApiResult<Deliverable> {
        deliverable::patch_deliverable(self, project_id, deliverable_id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_encodes_segments() {
        assert_eq!(
            join_url("https://api.example.com/v1/", &["projects", "p 1", "tasks", "a/b"]),
            "https://api.example.com/v1/projects/p%201/tasks/a%2Fb"
        );
        assert_eq!(join_url("/api", &["projects", "p-1_x.y~z"]), "/api/projects/p-1_x.y~z");
    }

    #[test]
    fn test_status_error_mapping() {
        assert_eq!(status_error(404, String::new()), ApiError::NotFound("resource".into()));
        assert_eq!(
            status_error(409, "stage deleted".into()),
            ApiError::Status { status: 409, message: "stage deleted".into() }
        );
    }

    #[test]
    fn test_api_trims_base() {
        let api = HttpApi::new("https://host/api/");
        assert_eq!(api.url(&["projects"]), "https://host/api/projects");
    }
}
