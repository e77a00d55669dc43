//! Mock backend for testing.
//!
//! Provides a scripted implementation of the [`Backend`] trait that records
//! every call, so tests can assert pipeline ordering (e.g. that outputs are
//! never fetched after a state failure) without spawning processes.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{json, Value};

use crate::backend::Backend;
use crate::error::{BackendError, BackendResult};
use crate::outputs::BackendOutputs;

#[derive(Clone)]
enum Scripted<T> {
    Ok(T),
    Unavailable(String),
}

/// Scripted, call-capturing backend.
#[derive(Clone)]
pub struct MockBackend {
    state: Arc<RwLock<Scripted<Value>>>,
    outputs: Arc<RwLock<Scripted<BackendOutputs>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a mock reporting a minimal valid state and empty outputs.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Scripted::Ok(json!({
                "values": {"root_module": {}}
            })))),
            outputs: Arc::new(RwLock::new(Scripted::Ok(BackendOutputs::default()))),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Script the state response.
    pub fn with_state(self, state: Value) -> Self {
        *self.state.write() = Scripted::Ok(state);
        self
    }

    /// Make the state query fail as unavailable.
    pub fn with_state_unavailable(self, detail: impl Into<String>) -> Self {
        *self.state.write() = Scripted::Unavailable(detail.into());
        self
    }

    /// Script the outputs response from a raw JSON object.
    pub fn with_outputs(self, outputs: Value) -> Self {
        let outputs = serde_json::from_value(outputs).expect("mock outputs must be an object");
        *self.outputs.write() = Scripted::Ok(outputs);
        self
    }

    /// Make the outputs query fail as unavailable.
    pub fn with_outputs_unavailable(self, detail: impl Into<String>) -> Self {
        *self.outputs.write() = Scripted::Unavailable(detail.into());
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().clone()
    }

    /// Number of calls to a specific method.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls.read().iter().filter(|c| *c == method).count()
    }

    fn record(&self, method: &str) {
        self.calls.write().push(method.to_string());
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch_state(&self) -> BackendResult<Value> {
        self.record("fetch_state");
        match &*self.state.read() {
            Scripted::Ok(state) => Ok(state.clone()),
            Scripted::Unavailable(detail) => {
                Err(BackendError::unavailable("mock show -json", detail))
            }
        }
    }

    async fn fetch_outputs(&self) -> BackendResult<BackendOutputs> {
        self.record("fetch_outputs");
        match &*self.outputs.read() {
            Scripted::Ok(outputs) => Ok(outputs.clone()),
            Scripted::Unavailable(detail) => {
                Err(BackendError::unavailable("mock output -json", detail))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let backend = MockBackend::new();

        backend.fetch_state().await.unwrap();
        backend.fetch_outputs().await.unwrap();
        backend.fetch_outputs().await.unwrap();

        assert_eq!(backend.calls(), vec!["fetch_state", "fetch_outputs", "fetch_outputs"]);
        assert_eq!(backend.call_count("fetch_outputs"), 2);
    }

    #[tokio::test]
    async fn test_mock_scripted_unavailability() {
        let backend = MockBackend::new().with_state_unavailable("no state file");

        let result = backend.fetch_state().await;
        assert!(matches!(result, Err(BackendError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_mock_scripted_outputs() {
        let backend = MockBackend::new().with_outputs(serde_json::json!({
            "vm_names": {"value": ["vm1"]}
        }));

        let outputs = backend.fetch_outputs().await.unwrap();
        assert_eq!(outputs.list_value("vm_names").unwrap(), vec!["vm1".to_string()]);
    }
}
