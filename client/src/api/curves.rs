//! Curve-set upload.

use super::ApiClient;
use crate::fetch::FetchResult;
use crate::types::{CurveSet, UploadCurveSetPayload};

/// Submit one curve set for a task and return the created projection.
pub async fn upload(api: &ApiClient, payload: &UploadCurveSetPayload) -> FetchResult<CurveSet> {
    api.post("/curves/upload", payload).await.into()
}
