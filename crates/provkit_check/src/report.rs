//! Final validation report.
//!
//! Compute and render are split so the report content can be asserted in
//! tests without capturing console output.

use serde_json::{Map, Value};

use provkit_backend::{keys, BackendOutputs};

const BANNER: &str = "============================================================";

/// Sentinel for summary fields the backend did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Structured summary of a provisioning run.
///
/// Every field is independently defaulted, so a partial or oddly shaped
/// `provisioning_summary` degrades field by field instead of failing.
#[derive(Debug, Clone)]
pub struct ProvisioningReport {
    pub environment: String,
    pub project_name: String,
    pub location: String,
    pub vm_count: String,
    pub vm_size: String,
    pub os_type: String,
    pub creation_time: String,
    pub connection_commands: Vec<String>,
    has_outputs: bool,
}

impl ProvisioningReport {
    /// Build the report from whatever outputs were fetched.
    pub fn from_outputs(outputs: Option<&BackendOutputs>) -> Self {
        let Some(outputs) = outputs else {
            return Self::empty(false);
        };

        let summary = outputs.summary();
        let field = |name: &str| summary_field(summary, name);

        Self {
            environment: field("environment"),
            project_name: field("project_name"),
            location: field("location"),
            vm_count: field("vm_count"),
            vm_size: field("vm_size"),
            os_type: field("os_type"),
            creation_time: field("creation_time"),
            connection_commands: outputs
                .list_value(keys::CONNECTION_COMMANDS)
                .unwrap_or_default(),
            has_outputs: true,
        }
    }

    fn empty(has_outputs: bool) -> Self {
        Self {
            environment: NOT_AVAILABLE.to_string(),
            project_name: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            vm_count: NOT_AVAILABLE.to_string(),
            vm_size: NOT_AVAILABLE.to_string(),
            os_type: NOT_AVAILABLE.to_string(),
            creation_time: NOT_AVAILABLE.to_string(),
            connection_commands: Vec::new(),
            has_outputs,
        }
    }

    /// Render the banner-framed textual report.
    pub fn render(&self) -> String {
        let mut text = format!("{}\nPROVISIONING VALIDATION REPORT\n{}\n", BANNER, BANNER);

        if !self.has_outputs {
            text.push_str("No outputs available\n");
            text.push_str(BANNER);
            text.push('\n');
            return text;
        }

        text.push_str(&format!("Environment: {}\n", self.environment));
        text.push_str(&format!("Project:     {}\n", self.project_name));
        text.push_str(&format!("Location:    {}\n", self.location));
        text.push_str(&format!("VM Count:    {}\n", self.vm_count));
        text.push_str(&format!("VM Size:     {}\n", self.vm_size));
        text.push_str(&format!("OS Type:     {}\n", self.os_type));
        text.push_str(&format!("Created:     {}\n", self.creation_time));

        if !self.connection_commands.is_empty() {
            text.push_str("\nConnection Commands:\n");
            for (i, command) in self.connection_commands.iter().enumerate() {
                text.push_str(&format!("  VM {}: {}\n", i + 1, command));
            }
        }

        text.push_str(&format!("\n{}\nVALIDATION COMPLETED\n{}\n", BANNER, BANNER));
        text
    }
}

fn summary_field(summary: Option<&Map<String, Value>>, name: &str) -> String {
    match summary.and_then(|s| s.get(name)) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
