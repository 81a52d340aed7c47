//! Per-request fetch lifecycle.
//!
//! Every call owns its own record: a [`Progress`] flag observable while the
//! request is in flight and a [`FetchResult`] once it settles. Records are
//! never shared between calls, so concurrent requests cannot overwrite each
//! other's outcome.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ApiError;

/// Observer handle for one request's in-flight state. Clones observe the
/// same call; a new call needs a new `Progress`.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    in_flight: Arc<AtomicBool>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// True strictly between call start and settlement.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Settled outcome of one request: exactly one of `data` and `error` is set.
#[derive(Debug)]
pub struct FetchResult<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> FetchResult<T> {
    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }

    /// Collapse the record back into a plain `Result`.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data.expect("settled fetch holds data or error")),
        }
    }
}

impl<T> From<Result<T, ApiError>> for FetchResult<T> {
    fn from(outcome: Result<T, ApiError>) -> Self {
        match outcome {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                data: None,
                error: Some(err),
            },
        }
    }
}

/// Drive one request future under one progress flag. The flag clears on
/// settlement and also when the call is dropped mid-flight.
pub async fn run<T, F>(progress: &Progress, request: F) -> FetchResult<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    progress.in_flight.store(true, Ordering::Release);
    let _guard = InFlightGuard(&progress.in_flight);
    request.await.into()
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
