//! # provkit_request
//!
//! Provisioning request handling for provkit: the one-shot translation path
//! from a JSON request document to the Terraform variable file.
//!
//! ## Pipeline
//!
//! 1. **RequestReader** reads the JSON document from disk
//! 2. **RequestValidator** checks required fields and value domains against
//!    the raw document (fixed check order, first miss wins)
//! 3. **ProvisioningRequest** deserializes with schema defaults applied
//! 4. **VariableFileWriter** renders deterministic tfvars content
//!
//! A request that fails validation is never written.
//!
//! ## Example
//!
//! ```rust,no_run
//! use provkit_request::{RequestReader, VariableFileWriter};
//!
//! let request = RequestReader::read("inputs/server_request.json").unwrap();
//! VariableFileWriter::write(&request, "inputs/server_request.json", "terraform/terraform.tfvars").unwrap();
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod validator;
pub mod writer;

pub use error::{RequestError, RequestResult};
pub use models::{Environment, ProvisioningRequest};
pub use reader::RequestReader;
pub use validator::RequestValidator;
pub use writer::VariableFileWriter;
