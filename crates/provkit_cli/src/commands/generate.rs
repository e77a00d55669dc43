//! Generate command - translate a request into Terraform variables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use provkit_request::{RequestReader, VariableFileWriter};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the provisioning request document
    #[arg(short, long, default_value = "inputs/server_request.json")]
    pub input: PathBuf,

    /// Path for the generated tfvars file
    #[arg(short, long, default_value = "terraform/terraform.tfvars")]
    pub output: PathBuf,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    info!("Reading input from {:?}", args.input);

    let request = RequestReader::read(&args.input)?;
    println!("Input validation passed");

    let source_label = args.input.display().to_string();
    VariableFileWriter::write(&request, &source_label, &args.output)?;
    println!("Generated Terraform variables: {}", args.output.display());

    println!("\nConfiguration Summary:");
    println!("   Environment: {}", request.environment);
    println!("   Project:     {}", request.project_name);
    println!("   Location:    {}", request.location);
    println!("   VM Count:    {}", request.vm_count);
    println!("   VM Size:     {}", request.vm_size);

    Ok(())
}
