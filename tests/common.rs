//! Shared helpers for the e2e suite: an in-process mock of the analysis
//! backend, fixtures, and a locator for the compiled CLI binary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{TimeZone, Utc};
use decay_client::types::{AnalysisResult, Curve, CurveSet, Task};
use decay_client::ApiClient;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

pub struct BackendState {
    pub tasks: Mutex<Vec<Task>>,
    pub analyses: Mutex<Vec<AnalysisResult>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
    next_id: AtomicU64,
    slow_gate: Notify,
}

impl BackendState {
    fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            analyses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            // seeded fixtures use small ids; server-assigned ones start high
            next_id: AtomicU64::new(1000),
            slow_gate: Notify::new(),
        }
    }

    fn record(&self, method: &str, path: &str, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

/// In-process mock of the analysis backend REST surface.
pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(BackendState::new());
        let router = Router::new()
            .route("/api/tasks/", get(list_tasks))
            .route("/api/tasks/:id", get(get_task))
            .route("/api/tasks/create", post(create_task))
            .route("/api/curves/upload", post(upload_curves))
            .route("/api/analysis/start", post(start_analysis))
            .route("/api/analysis/:id", get(get_analysis))
            .route("/api/slow", get(slow))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url()).expect("build api client")
    }

    pub fn seed_task(&self, task: Task) {
        self.state.tasks.lock().unwrap().push(task);
    }

    pub fn seed_analysis(&self, analysis: AnalysisResult) {
        self.state.analyses.lock().unwrap().push(analysis);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Let a pending `/api/slow` request settle.
    pub fn release_slow(&self) {
        self.state.slow_gate.notify_one();
    }
}

async fn list_tasks(State(state): State<Arc<BackendState>>) -> Json<Vec<Task>> {
    state.record("GET", "/api/tasks/", None);
    Json(state.tasks.lock().unwrap().clone())
}

async fn get_task(State(state): State<Arc<BackendState>>, Path(id): Path<u64>) -> Response {
    state.record("GET", &format!("/api/tasks/{id}"), None);
    let tasks = state.tasks.lock().unwrap();
    match tasks.iter().find(|t| t.id == id) {
        Some(task) => Json(task.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "task not found").into_response(),
    }
}

async fn create_task(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Task> {
    state.record("POST", "/api/tasks/create", Some(body.clone()));
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Untitled task")
        .to_string();
    let task = Task {
        id: state.next_id(),
        title,
        created_at: Utc::now(),
        curve_set: None,
        analysis_results_id: None,
        analysis_results: None,
        processing_time: None,
    };
    state.tasks.lock().unwrap().push(task.clone());
    Json(task)
}

async fn upload_curves(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", "/api/curves/upload", Some(body.clone()));

    let Some(task_id) = body.get("task_id").and_then(Value::as_u64) else {
        return (StatusCode::BAD_REQUEST, "task_id missing").into_response();
    };
    let mut tasks = state.tasks.lock().unwrap();
    let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
        return (StatusCode::NOT_FOUND, "task not found").into_response();
    };

    let description = body
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let set_id = state.next_id();
    let curves = body
        .get("curves")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let intensity = float_vec(entry.get("intensity"));
                    let irf = entry.get("irf").map(|v| float_vec(Some(v)));
                    Curve {
                        id: set_id * 100 + index as u64,
                        time_axis: float_vec(entry.get("time_axis")),
                        raw: intensity.clone(),
                        raw_scaled: intensity.clone(),
                        convolved: intensity.clone(),
                        noisy: intensity,
                        irf: irf.clone(),
                        irf_scaled: irf,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let set = CurveSet {
        id: set_id,
        task_id,
        description,
        curves,
    };
    task.curve_set = Some(set.clone());
    Json(set).into_response()
}

async fn start_analysis(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", "/api/analysis/start", Some(body.clone()));

    let Some(task_id) = body.get("task_id").and_then(Value::as_u64) else {
        return (StatusCode::BAD_REQUEST, "task_id missing").into_response();
    };
    let mut tasks = state.tasks.lock().unwrap();
    let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
        return (StatusCode::NOT_FOUND, "task not found").into_response();
    };
    let Some(set_id) = task.curve_set.as_ref().map(|set| set.id) else {
        return (StatusCode::BAD_REQUEST, "task has no curve set").into_response();
    };

    let analysis = sample_analysis(state.next_id(), set_id);
    task.analysis_results_id = Some(analysis.id);
    task.processing_time = Some(0.42);
    state.analyses.lock().unwrap().push(analysis.clone());
    Json(analysis).into_response()
}

async fn get_analysis(State(state): State<Arc<BackendState>>, Path(id): Path<u64>) -> Response {
    state.record("GET", &format!("/api/analysis/{id}"), None);
    let analyses = state.analyses.lock().unwrap();
    match analyses.iter().find(|a| a.id == id) {
        Some(analysis) => Json(analysis.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "analysis not found").into_response(),
    }
}

/// Answers only once released, so tests can observe an in-flight call.
async fn slow(State(state): State<Arc<BackendState>>) -> Json<Value> {
    state.record("GET", "/api/slow", None);
    state.slow_gate.notified().await;
    Json(serde_json::json!({ "ok": true }))
}

fn float_vec(value: Option<&Value>) -> Vec<f64> {
    value
        .and_then(Value::as_array)
        .map(|vals| vals.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

pub fn sample_task(id: u64) -> Task {
    Task {
        id,
        title: format!("Decay run {id}"),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        curve_set: None,
        analysis_results_id: None,
        analysis_results: None,
        processing_time: None,
    }
}

pub fn sample_task_with_curves(id: u64) -> Task {
    let mut task = sample_task(id);
    task.curve_set = Some(sample_curve_set(id * 10, id));
    task
}

pub fn sample_curve_set(id: u64, task_id: u64) -> CurveSet {
    CurveSet {
        id,
        task_id,
        description: "reference measurement".to_string(),
        curves: vec![sample_curve(id * 10)],
    }
}

pub fn sample_curve(id: u64) -> Curve {
    Curve {
        id,
        time_axis: vec![0.0, 0.5, 1.0, 1.5],
        raw: vec![10.0, 7.5, 4.2, 2.1],
        raw_scaled: vec![1.0, 0.75, 0.42, 0.21],
        convolved: vec![9.1, 7.0, 4.0, 2.0],
        noisy: vec![10.4, 7.2, 4.5, 1.9],
        irf: Some(vec![0.0, 1.0, 0.4, 0.1]),
        irf_scaled: Some(vec![0.0, 1.0, 0.4, 0.1]),
    }
}

pub fn sample_analysis(id: u64, curve_set_id: u64) -> AnalysisResult {
    AnalysisResult {
        id,
        curve_set_id,
        dw_real: vec![1.0, 0.82, 0.61],
        dw_imag: vec![0.0, 0.21, 0.35],
        coeff_v: 0.37,
        coeff_u: 0.64,
        tau1: 2.13,
        tau2: 0.58,
        a1_coeffs: vec![0.9, 0.05, -0.01],
        a2_coeffs: vec![0.1, -0.02, 0.004],
        omega: 0.31,
    }
}

/// Poll a condition until it holds or two seconds pass.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within 2s");
}

/// Path to the compiled `decay` binary inside the workspace target dir.
pub fn cli_binary() -> PathBuf {
    let target_dir = std::env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            dir.pop();
            dir.push("target");
            dir
        });
    let binary = target_dir
        .join("debug")
        .join(format!("decay{}", std::env::consts::EXE_SUFFIX));
    assert!(
        binary.exists(),
        "decay binary not found at {} (build the workspace first)",
        binary.display()
    );
    binary
}
