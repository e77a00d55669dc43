//! Request file reading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RequestError, RequestResult};
use crate::models::ProvisioningRequest;
use crate::validator::RequestValidator;

/// Reader for provisioning request documents.
pub struct RequestReader;

impl RequestReader {
    /// Read, validate, and deserialize a request from a JSON file.
    ///
    /// A request that fails validation never deserializes, so downstream
    /// consumers only ever see well-formed requests with defaults applied.
    pub fn read(path: impl AsRef<Path>) -> RequestResult<ProvisioningRequest> {
        let path = path.as_ref();
        debug!("Reading provisioning request from {:?}", path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RequestError::InputNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let raw: serde_json::Value = serde_json::from_str(&content)?;
        RequestValidator::validate(&raw)?;

        let request = serde_json::from_value(raw)?;
        Ok(request)
    }
}
