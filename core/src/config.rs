//! Client configuration.

use std::time::Duration;

/// Where the backend listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";

/// Upper bound on concurrent deletes during a bulk delete.
pub const DEFAULT_BULK_DELETE_WORKERS: usize = 4;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Clamped to at least 1 when the pool is started.
    pub bulk_delete_workers: usize,
    /// Applied by the host transport. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bulk_delete_workers: DEFAULT_BULK_DELETE_WORKERS,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_bulk_delete_workers(mut self, workers: usize) -> Self {
        self.bulk_delete_workers = workers;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
