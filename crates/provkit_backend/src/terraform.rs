//! Terraform CLI backend implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::debug;

use crate::backend::Backend;
use crate::error::{BackendError, BackendResult};
use crate::outputs::BackendOutputs;

/// Backend implementation that queries the Terraform CLI.
///
/// Spawns `terraform show -json` and `terraform output -json` in the working
/// directory and parses their stdout. Every failure mode of an invocation —
/// the binary missing, a non-zero exit, unparsable stdout — surfaces as
/// [`BackendError::Unavailable`].
pub struct TerraformCli {
    working_dir: PathBuf,
    program: String,
}

impl TerraformCli {
    /// Create a client rooted at the given Terraform working directory.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
            program: "terraform".to_string(),
        }
    }

    /// Use a different binary (or wrapper script) in place of `terraform`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    async fn run(&self, args: &[&str]) -> BackendResult<String> {
        let command_label = format!("{} {}", self.program, args.join(" "));
        debug!("Spawning backend query: {}", command_label);

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .await
            .map_err(|e| BackendError::unavailable(&command_label, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BackendError::unavailable(&command_label, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn parse<T: serde::de::DeserializeOwned>(
        command_label: &str,
        stdout: &str,
    ) -> BackendResult<T> {
        serde_json::from_str(stdout).map_err(|e| {
            BackendError::unavailable(command_label, format!("unparsable output: {}", e))
        })
    }
}

#[async_trait]
impl Backend for TerraformCli {
    async fn fetch_state(&self) -> BackendResult<Value> {
        let stdout = self.run(&["show", "-json"]).await?;
        Self::parse(&format!("{} show -json", self.program), &stdout)
    }

    async fn fetch_outputs(&self) -> BackendResult<BackendOutputs> {
        let stdout = self.run(&["output", "-json"]).await?;
        Self::parse(&format!("{} output -json", self.program), &stdout)
    }
}
