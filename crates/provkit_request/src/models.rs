//! Data models for provisioning requests.

use serde::{Deserialize, Serialize};
use serde_json::Map;

/// Deployment environment for a provisioning request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    /// The set of accepted environment names, in declaration order.
    pub const ALLOWED: [&'static str; 3] = ["dev", "staging", "production"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_admin_username() -> String {
    "azureuser".to_string()
}

fn default_os_type() -> String {
    "linux".to_string()
}

/// A validated request for a fleet of virtual machines.
///
/// Immutable once deserialized; consumed exactly once by the tfvars writer.
/// Tags keep the insertion order of the source document so rendering stays
/// byte-stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisioningRequest {
    pub environment: Environment,
    pub project_name: String,
    pub location: String,
    pub vm_count: u32,
    pub vm_size: String,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    #[serde(default = "default_os_type")]
    pub os_type: String,
    #[serde(default)]
    pub tags: Option<Map<String, serde_json::Value>>,
}

impl ProvisioningRequest {
    /// Whether the request carries at least one tag.
    pub fn has_tags(&self) -> bool {
        self.tags.as_ref().map_or(false, |t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let request: ProvisioningRequest = serde_json::from_str(
            r#"{"environment":"dev","project_name":"demo","location":"eastus","vm_count":2,"vm_size":"Standard_B2s"}"#,
        )
        .unwrap();

        assert_eq!(request.admin_username, "azureuser");
        assert_eq!(request.os_type, "linux");
        assert!(!request.has_tags());
    }

    #[test]
    fn test_environment_roundtrip() {
        let env: Environment = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(env, Environment::Production);
        assert_eq!(env.to_string(), "production");
    }
}
