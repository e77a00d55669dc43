//! Validate command - run the post-provisioning validation pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use provkit_backend::TerraformCli;
use provkit_check::{IcmpPinger, ProbeOutcome, ValidationPipeline};

#[derive(Args)]
pub struct ValidateArgs {
    /// Terraform working directory
    #[arg(short, long, default_value = "terraform")]
    pub dir: PathBuf,

    /// Skip the connectivity probe
    #[arg(long)]
    pub skip_ping: bool,
}

pub async fn execute(args: ValidateArgs) -> Result<()> {
    info!("Starting infrastructure validation");

    if !args.dir.exists() {
        anyhow::bail!("Terraform directory not found: {}", args.dir.display());
    }

    let backend = Arc::new(TerraformCli::new(&args.dir));
    let mut pipeline = ValidationPipeline::new(backend, Arc::new(IcmpPinger));
    if args.skip_ping {
        pipeline = pipeline.with_probe_disabled();
    }

    let result = pipeline
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    println!("Provisioned resources:");
    for check in &result.resource_report.checks {
        println!("  - {}", check.detail);
    }

    if !result.connectivity.is_empty() {
        println!("\nConnectivity:");
        for observation in &result.connectivity {
            let outcome = match observation.outcome {
                ProbeOutcome::Reachable => "reachable",
                ProbeOutcome::Unreachable => "not responding to ping (may be firewall)",
                ProbeOutcome::Skipped => "skipped",
            };
            println!("  - {}: {}", observation.address, outcome);
        }
    }

    println!();
    println!("{}", result.report);
    println!("All validation checks passed!");

    Ok(())
}
