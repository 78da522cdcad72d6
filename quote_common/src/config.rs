//! Deadline budgets for each stage of the quote pipeline.
//!
//! Components take the duration they need at construction time, so tests can shrink
//! or stretch any single budget without touching the others.
use std::time::Duration;

/// Client to quote service, in milliseconds.
pub const CLIENT_REQUEST_MS: u64 = 300;
/// Quote service to upstream feed, in milliseconds.
pub const UPSTREAM_FETCH_MS: u64 = 200;
/// Quote service to storage insert, in milliseconds.
pub const STORAGE_WRITE_MS: u64 = 10;

/// Per-stage deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Budget of the whole client request (300ms by default).
    pub client_request: Duration,
    /// Budget of the upstream fetch (200ms by default).
    pub upstream_fetch: Duration,
    /// Budget of the storage insert (10ms by default).
    pub storage_write: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Timeouts {
            client_request: Duration::from_millis(CLIENT_REQUEST_MS),
            upstream_fetch: Duration::from_millis(UPSTREAM_FETCH_MS),
            storage_write: Duration::from_millis(STORAGE_WRITE_MS),
        }
    }
}

impl Timeouts {
    /// Worst case time the server spends on one quote request.
    pub fn server_budget(&self) -> Duration {
        self.upstream_fetch + self.storage_write
    }

    /// Whether the client deadline leaves room for the server's worst case.
    pub fn client_outlasts_server(&self) -> bool {
        self.client_request > self.server_budget()
    }
}
