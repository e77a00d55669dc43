//! # provkit_check
//!
//! The post-provisioning validation pipeline: a strictly ordered sequence of
//! dependent checks against the infrastructure backend, with partial-failure
//! semantics.
//!
//! ## Stages
//!
//! 1. **Fetch state** — fatal if unavailable or structurally invalid
//! 2. **Fetch outputs** — fatal if unavailable
//! 3. **Validate resources** — all four expected keys examined, fatal if any
//!    is missing
//! 4. **Probe connectivity** — advisory only, never fails the run
//! 5. **Report** — always rendered from whatever outputs were fetched
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use provkit_backend::TerraformCli;
//! use provkit_check::{IcmpPinger, ValidationPipeline};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = Arc::new(TerraformCli::new("terraform"));
//! let mut pipeline = ValidationPipeline::new(backend, Arc::new(IcmpPinger));
//! let result = pipeline.run().await?;
//! println!("{}", result.report);
//! # Ok(())
//! # }
//! ```

pub mod connectivity;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resources;

pub use connectivity::{ConnectivityProbe, IcmpPinger, MockPinger, Pinger, ProbeObservation, ProbeOutcome};
pub use error::{CheckError, CheckResult};
pub use pipeline::{PipelineStage, ValidationPipeline, ValidationResult};
pub use report::{ProvisioningReport, NOT_AVAILABLE};
pub use resources::{ResourceCheck, ResourceReport, ResourceValidator};
