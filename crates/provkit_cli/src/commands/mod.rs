//! CLI command definitions.
//!
//! Each subcommand maps to one of the two workflows: translating a request
//! into Terraform variables, or validating what Terraform provisioned.

use clap::{Parser, Subcommand};

pub mod generate;
pub mod validate;

/// provkit - VM fleet provisioning front-end and validator
#[derive(Parser)]
#[command(name = "provkit")]
#[command(version, about = "provkit - VM fleet provisioning front-end and validator")]
#[command(long_about = r#"
provkit translates VM provisioning requests into Terraform variable files and
verifies provisioned infrastructure after apply.

WORKFLOWS:
  generate  → Validate a request document and write terraform.tfvars
  validate  → Check Terraform state, outputs, resources, and connectivity

EXIT CODES:
  0 - Success
  1 - Input validation failure, file error, or fatal validation stage

Connectivity probe failures are advisory and never affect the exit code.
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a provisioning request and generate Terraform variables
    Generate(generate::GenerateArgs),

    /// Validate provisioned infrastructure against the backend
    Validate(validate::ValidateArgs),
}
