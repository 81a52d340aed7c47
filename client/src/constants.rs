//! Client-wide defaults.

/// Backend origin used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path prefix the backend mounts the API under.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Timeout applied to every request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
