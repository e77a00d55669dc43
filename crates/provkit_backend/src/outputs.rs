//! Backend output document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output keys the validator and report know about.
pub mod keys {
    pub const RESOURCE_GROUP_NAME: &str = "resource_group_name";
    pub const VM_NAMES: &str = "vm_names";
    pub const VM_PUBLIC_IPS: &str = "vm_public_ips";
    pub const VM_PRIVATE_IPS: &str = "vm_private_ips";
    pub const PROVISIONING_SUMMARY: &str = "provisioning_summary";
    pub const CONNECTION_COMMANDS: &str = "connection_commands";
}

/// Outputs reported by the backend after a successful apply.
///
/// Each entry maps an output name to a `{ "value": ... }` object. Any key may
/// be absent; absence is meaningful data for the resource validator, not an
/// error. Accessors return `None` rather than failing when a value does not
/// have the expected shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendOutputs {
    entries: Map<String, Value>,
}

impl BackendOutputs {
    /// Build outputs from a raw JSON object.
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The inner `value` of an output entry.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)?.get("value")
    }

    /// A string-valued output.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.value(key)?.as_str()
    }

    /// A string-sequence output.
    pub fn list_value(&self, key: &str) -> Option<Vec<String>> {
        let items = self.value(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// The provisioning summary object, if reported.
    pub fn summary(&self) -> Option<&Map<String, Value>> {
        self.value(keys::PROVISIONING_SUMMARY)?.as_object()
    }
}
