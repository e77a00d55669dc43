//! # provkit_backend
//!
//! Query client for the declarative-infrastructure backend.
//!
//! The backend is modeled as an abstract query capability — "fetch current
//! state", "fetch outputs" — behind the [`Backend`] trait. The shipped
//! implementation, [`TerraformCli`], shells out to the Terraform CLI and
//! parses its JSON stdout; [`MockBackend`] scripts responses for tests.
//!
//! ## Semantics
//!
//! - One external invocation per call; transient failures surface, never mask
//! - Non-zero exit, spawn failure, and unparsable output all collapse into
//!   [`BackendError::Unavailable`]
//! - No shared or cached state between calls
//!
//! ## Example
//!
//! ```rust,no_run
//! use provkit_backend::{Backend, TerraformCli};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = TerraformCli::new("terraform");
//! let state = backend.fetch_state().await?;
//! let outputs = backend.fetch_outputs().await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod mock;
pub mod outputs;
pub mod terraform;

pub use backend::{state_is_valid, Backend};
pub use error::{BackendError, BackendResult};
pub use mock::MockBackend;
pub use outputs::{keys, BackendOutputs};
pub use terraform::TerraformCli;
