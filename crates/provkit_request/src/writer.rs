//! Terraform variable file rendering and writing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::RequestResult;
use crate::models::ProvisioningRequest;

/// Writer for Terraform tfvars files.
///
/// Rendering is deterministic: the same request always produces byte-identical
/// output. Key order is fixed and keys are padded so the `=` column aligns.
pub struct VariableFileWriter;

const KEY_WIDTH: usize = 16;

impl VariableFileWriter {
    /// Render a validated request as tfvars content.
    ///
    /// `source_label` names where the request came from and only appears in
    /// the header comment.
    pub fn render(request: &ProvisioningRequest, source_label: &str) -> String {
        let mut content = format!(
            "# Auto-generated Terraform variables\n# Generated from: {}\n\n",
            source_label
        );

        Self::push_quoted(&mut content, "environment", request.environment.as_str());
        Self::push_quoted(&mut content, "project_name", &request.project_name);
        Self::push_quoted(&mut content, "location", &request.location);
        content.push_str(&format!("{:<KEY_WIDTH$} = {}\n", "vm_count", request.vm_count));
        Self::push_quoted(&mut content, "vm_size", &request.vm_size);
        Self::push_quoted(&mut content, "admin_username", &request.admin_username);
        Self::push_quoted(&mut content, "os_type", &request.os_type);

        if request.has_tags() {
            content.push_str("\ntags = {\n");
            for (key, value) in request.tags.as_ref().into_iter().flatten() {
                let value = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
                content.push_str(&format!("  {} = \"{}\"\n", key, value));
            }
            content.push_str("}\n");
        }

        content
    }

    /// Render and write the tfvars file.
    ///
    /// The parent directory must already exist; a missing directory surfaces
    /// as an IO error.
    pub fn write(
        request: &ProvisioningRequest,
        source_label: &str,
        path: impl AsRef<Path>,
    ) -> RequestResult<()> {
        let path = path.as_ref();
        debug!("Writing tfvars to {:?}", path);

        let content = Self::render(request, source_label);
        fs::write(path, content)?;
        Ok(())
    }

    fn push_quoted(content: &mut String, key: &str, value: &str) {
        content.push_str(&format!("{:<KEY_WIDTH$} = \"{}\"\n", key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ProvisioningRequest {
        serde_json::from_str(
            r#"{"environment":"dev","project_name":"demo","location":"eastus","vm_count":2,"vm_size":"Standard_B2s"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = sample_request();
        let first = VariableFileWriter::render(&request, "inputs/server_request.json");
        let second = VariableFileWriter::render(&request, "inputs/server_request.json");
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_aligns_and_quotes() {
        let request = sample_request();
        let content = VariableFileWriter::render(&request, "inputs/server_request.json");

        assert!(content.contains("environment      = \"dev\""));
        assert!(content.contains("vm_count         = 2"));
        assert!(content.contains("admin_username   = \"azureuser\""));
        assert!(!content.contains("tags = {"));
    }

    #[test]
    fn test_tags_block_preserves_insertion_order() {
        let request: ProvisioningRequest = serde_json::from_str(
            r#"{"environment":"dev","project_name":"demo","location":"eastus","vm_count":1,
                "vm_size":"Standard_B2s","tags":{"team":"infra","tier":"prod"}}"#,
        )
        .unwrap();

        let content = VariableFileWriter::render(&request, "test");
        let team = content.find("  team = \"infra\"").expect("team tag missing");
        let tier = content.find("  tier = \"prod\"").expect("tier tag missing");
        assert!(team < tier);
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_empty_tags_omit_block() {
        let request: ProvisioningRequest = serde_json::from_str(
            r#"{"environment":"dev","project_name":"demo","location":"eastus","vm_count":1,
                "vm_size":"Standard_B2s","tags":{}}"#,
        )
        .unwrap();

        let content = VariableFileWriter::render(&request, "test");
        assert!(!content.contains("tags"));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terraform.tfvars");

        let request = sample_request();
        VariableFileWriter::write(&request, "test", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, VariableFileWriter::render(&request, "test"));
    }

    #[test]
    fn test_write_fails_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("terraform.tfvars");

        let request = sample_request();
        assert!(VariableFileWriter::write(&request, "test", &path).is_err());
    }
}
