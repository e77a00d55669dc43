//! Backend query trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendResult;
use crate::outputs::BackendOutputs;

/// Abstract query capability over the declarative-infrastructure backend.
///
/// Implementations may shell out, call an SDK, or hit an HTTP endpoint; the
/// contract is only "return a JSON document or signal unavailability". Each
/// call is attempted exactly once — no retries, no caching between calls.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the backend's recorded state as a raw JSON document.
    async fn fetch_state(&self) -> BackendResult<Value>;

    /// Fetch the named outputs of the last apply.
    async fn fetch_outputs(&self) -> BackendResult<BackendOutputs>;
}

/// Whether a state document is valid: it must carry a non-empty root module
/// under `values`.
pub fn state_is_valid(state: &Value) -> bool {
    state
        .get("values")
        .and_then(|v| v.get("root_module"))
        .is_some()
}
