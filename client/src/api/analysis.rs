//! Analysis operations.

use super::ApiClient;
use crate::fetch::FetchResult;
use crate::types::{AnalysisResult, StartAnalysisPayload};

/// Start an analysis over a task's curve set.
pub async fn start(api: &ApiClient, task_id: u64) -> FetchResult<AnalysisResult> {
    api.post("/analysis/start", &StartAnalysisPayload { task_id })
        .await
        .into()
}

/// Fetch a finished analysis by identifier.
pub async fn get(api: &ApiClient, id: u64) -> FetchResult<AnalysisResult> {
    api.get(&format!("/analysis/{id}")).await.into()
}
