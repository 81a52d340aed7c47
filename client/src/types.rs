//! Data-transfer types mirroring the analysis service JSON.
//!
//! Every entity here is a read-only projection of server state; the client
//! fetches them per view and never mutates them locally. Parallel numeric
//! sequences inside a [`Curve`] share the time-axis length; that invariant
//! is enforced server-side and trusted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unit of work a user submits: optionally one curve set and one
/// analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_set: Option<CurveSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_results_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_results: Option<AnalysisResult>,
    /// Server-side processing duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

/// The group of decay curves uploaded for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSet {
    pub id: u64,
    pub task_id: u64,
    pub description: String,
    pub curves: Vec<Curve>,
}

/// One decay curve: parallel sample sequences keyed by the time axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    pub id: u64,
    pub time_axis: Vec<f64>,
    pub raw: Vec<f64>,
    pub raw_scaled: Vec<f64>,
    pub convolved: Vec<f64>,
    pub noisy: Vec<f64>,
    /// Measured instrument response, when one was uploaded with the curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irf: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irf_scaled: Option<Vec<f64>>,
}

/// Frequency-domain fit produced by the server for one curve set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: u64,
    pub curve_set_id: u64,
    pub dw_real: Vec<f64>,
    pub dw_imag: Vec<f64>,
    pub coeff_v: f64,
    pub coeff_u: f64,
    pub tau1: f64,
    pub tau2: f64,
    pub a1_coeffs: Vec<f64>,
    pub a2_coeffs: Vec<f64>,
    pub omega: f64,
}

/// Body of `POST /tasks/create`. An absent title is omitted from the
/// serialized body entirely so the server assigns its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Body of `POST /analysis/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartAnalysisPayload {
    pub task_id: u64,
}

/// One curve inside an upload payload. The IRF is optional per curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCurve {
    pub time_axis: Vec<f64>,
    pub intensity: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irf: Option<Vec<f64>>,
}

/// Body of `POST /curves/upload`. Sequences are transmitted verbatim;
/// no reordering, scaling or deduplication happens client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCurveSetPayload {
    pub task_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub curves: Vec<UploadCurve>,
}

/// One curve as it appears in an uploaded data document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedCurve {
    pub name: String,
    pub time: Vec<f64>,
    pub intensity: Vec<f64>,
    /// Empty when the curve carries no instrument response.
    #[serde(default)]
    pub irf: Vec<f64>,
}

/// The document a user feeds to the upload form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedData {
    pub curves: Vec<UploadedCurve>,
}

impl UploadedData {
    /// Convert the document into the wire payload for one task. Curve
    /// names are a document-level convenience and do not travel.
    pub fn into_payload(self, task_id: u64, description: Option<String>) -> UploadCurveSetPayload {
        let curves = self
            .curves
            .into_iter()
            .map(|curve| UploadCurve {
                time_axis: curve.time,
                intensity: curve.intensity,
                irf: if curve.irf.is_empty() { None } else { Some(curve.irf) },
            })
            .collect();

        UploadCurveSetPayload {
            task_id,
            description,
            curves,
        }
    }
}
