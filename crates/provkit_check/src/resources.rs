//! Expected-resource validation against backend outputs.

use provkit_backend::{keys, BackendOutputs};

/// One per-key presence check with its diagnostic line.
#[derive(Debug, Clone)]
pub struct ResourceCheck {
    pub key: String,
    pub present: bool,
    pub detail: String,
}

/// Accumulated result of the resource validation pass.
#[derive(Debug, Default)]
pub struct ResourceReport {
    pub checks: Vec<ResourceCheck>,
    pub passed: bool,
}

impl ResourceReport {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            passed: true,
        }
    }

    pub fn add_check(&mut self, key: &str, present: bool, detail: impl Into<String>) {
        if !present {
            self.passed = false;
        }
        self.checks.push(ResourceCheck {
            key: key.to_string(),
            present,
            detail: detail.into(),
        });
    }

    /// Keys that were expected but not reported, in check order.
    pub fn missing_keys(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.key.clone())
            .collect()
    }
}

/// Validator asserting the fixed set of expected output keys.
///
/// All four keys are examined every time so the caller gets the complete
/// picture in one pass; this is deliberately not fail-fast. Presence is the
/// contract — value shapes are not deeply validated.
pub struct ResourceValidator;

impl ResourceValidator {
    pub fn validate(outputs: &BackendOutputs) -> ResourceReport {
        let mut report = ResourceReport::new();

        Self::check_resource_group(outputs, &mut report);
        Self::check_named_list(outputs, &mut report, keys::VM_NAMES, "Virtual Machines", "created");
        Self::check_named_list(outputs, &mut report, keys::VM_PUBLIC_IPS, "Public IPs", "assigned");
        Self::check_named_list(outputs, &mut report, keys::VM_PRIVATE_IPS, "Private IPs", "assigned");

        report
    }

    fn check_resource_group(outputs: &BackendOutputs, report: &mut ResourceReport) {
        if outputs.contains(keys::RESOURCE_GROUP_NAME) {
            let name = outputs
                .str_value(keys::RESOURCE_GROUP_NAME)
                .unwrap_or("(unnamed)");
            report.add_check(
                keys::RESOURCE_GROUP_NAME,
                true,
                format!("Resource Group: {}", name),
            );
        } else {
            report.add_check(keys::RESOURCE_GROUP_NAME, false, "Resource Group not found");
        }
    }

    fn check_named_list(
        outputs: &BackendOutputs,
        report: &mut ResourceReport,
        key: &str,
        label: &str,
        verb: &str,
    ) {
        if outputs.contains(key) {
            let detail = match outputs.list_value(key) {
                Some(items) => format!("{}: {} {} ({})", label, items.len(), verb, items.join(", ")),
                None => format!("{}: reported", label),
            };
            report.add_check(key, true, detail);
        } else {
            report.add_check(key, false, format!("{} not found", label));
        }
    }
}
