//! Decay Analysis Client
//!
//! A typed client for the decay-curve analysis REST service:
//! - Data-transfer types mirroring the server's JSON payloads
//! - A generic JSON request helper with a fixed error taxonomy
//! - Per-request fetch lifecycle records (no shared result state)
//! - Resource functions for tasks, curve uploads and analyses
//! - The client-side route table mapping paths to views

pub mod api;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod router;
pub mod types;

// Re-export public types
pub use api::ApiClient;
pub use error::{ApiError, Result};
pub use fetch::{FetchResult, Progress};
pub use types::{AnalysisResult, Curve, CurveSet, Task};
