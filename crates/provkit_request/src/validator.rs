//! Raw request validation.
//!
//! Validation runs against the untyped JSON document before deserialization so
//! the diagnostics can name the first missing field in declaration order, and
//! so value-domain errors are reported before serde's own type errors.

use serde_json::Value;

use crate::error::{RequestError, RequestResult};
use crate::models::Environment;

/// Required fields, checked in this order. The first miss short-circuits.
const REQUIRED_FIELDS: [&str; 5] = [
    "environment",
    "vm_count",
    "vm_size",
    "location",
    "project_name",
];

/// Validator for raw provisioning request documents.
pub struct RequestValidator;

impl RequestValidator {
    /// Validate a raw request document.
    ///
    /// Checks required-field presence, `vm_count` domain, and the
    /// `environment` enum. Never mutates the input.
    pub fn validate(raw: &Value) -> RequestResult<()> {
        for field in REQUIRED_FIELDS {
            if raw.get(field).is_none() {
                return Err(RequestError::MissingField(field.to_string()));
            }
        }

        match raw["vm_count"].as_i64() {
            Some(count) if count >= 1 => {}
            _ => return Err(RequestError::InvalidVmCount),
        }

        let environment = raw["environment"].as_str().unwrap_or_default();
        if !Environment::ALLOWED.contains(&environment) {
            return Err(RequestError::InvalidEnvironment(environment.to_string()));
        }

        Ok(())
    }
}
