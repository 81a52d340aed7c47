//! Task operations.

use super::ApiClient;
use crate::fetch::FetchResult;
use crate::types::{CreateTaskPayload, Task};

/// Fetch the full task history.
pub async fn list(api: &ApiClient) -> FetchResult<Vec<Task>> {
    api.get("/tasks/").await.into()
}

/// Fetch one task by identifier.
pub async fn get(api: &ApiClient, id: u64) -> FetchResult<Task> {
    api.get(&format!("/tasks/{id}")).await.into()
}

/// Create a task. An empty or absent title is omitted from the body so the
/// server assigns its default.
pub async fn create(api: &ApiClient, title: Option<&str>) -> FetchResult<Task> {
    let title = title.filter(|t| !t.is_empty()).map(str::to_owned);
    api.post("/tasks/create", &CreateTaskPayload { title })
        .await
        .into()
}
