//! Integration tests for the validation pipeline.

use std::sync::Arc;

use serde_json::json;

use provkit_backend::MockBackend;
use provkit_check::{
    CheckError, MockPinger, PipelineStage, ProbeOutcome, ValidationPipeline,
};

fn complete_outputs() -> serde_json::Value {
    json!({
        "resource_group_name": {"value": "rg-demo-dev"},
        "vm_names": {"value": ["vm1", "vm2"]},
        "vm_public_ips": {"value": ["20.1.2.3", "20.1.2.4"]},
        "vm_private_ips": {"value": ["10.0.0.4", "10.0.0.5"]},
        "provisioning_summary": {"value": {
            "environment": "dev",
            "project_name": "demo",
            "location": "eastus",
            "vm_count": 2,
            "vm_size": "Standard_B2s",
            "os_type": "linux",
            "creation_time": "2024-05-01T10:00:00Z"
        }},
        "connection_commands": {"value": ["ssh azureuser@20.1.2.3", "ssh azureuser@20.1.2.4"]}
    })
}

#[tokio::test]
async fn test_full_pass_reaches_done() {
    let backend = MockBackend::new().with_outputs(complete_outputs());
    let pinger = MockPinger::new().reachable("20.1.2.3").reachable("20.1.2.4");
    let mut pipeline = ValidationPipeline::new(Arc::new(backend), Arc::new(pinger));

    let result = pipeline.run().await.unwrap();

    assert_eq!(pipeline.stage(), PipelineStage::Done);
    assert!(result.state_ok);
    assert!(result.resources_ok);
    assert_eq!(result.connectivity.len(), 2);
    assert!(result.report.contains("Environment: dev"));
    assert!(result.report.contains("VM 2: ssh azureuser@20.1.2.4"));
}

#[tokio::test]
async fn test_state_failure_halts_before_outputs() {
    let backend = MockBackend::new().with_state_unavailable("terraform not initialized");
    let pinger = MockPinger::new();
    let mut pipeline =
        ValidationPipeline::new(Arc::new(backend.clone()), Arc::new(pinger.clone()));

    let result = pipeline.run().await;

    assert!(matches!(result, Err(CheckError::InvalidState(_))));
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    // No outputs fetched, no probes attempted.
    assert_eq!(backend.call_count("fetch_state"), 1);
    assert_eq!(backend.call_count("fetch_outputs"), 0);
    assert!(pinger.probed().is_empty());
}

#[tokio::test]
async fn test_structurally_invalid_state_is_fatal() {
    let backend = MockBackend::new().with_state(json!({"format_version": "1.0"}));
    let mut pipeline =
        ValidationPipeline::new(Arc::new(backend.clone()), Arc::new(MockPinger::new()));

    let result = pipeline.run().await;

    assert!(matches!(result, Err(CheckError::InvalidState(_))));
    assert_eq!(backend.call_count("fetch_outputs"), 0);
}

#[tokio::test]
async fn test_outputs_failure_halts_before_resources() {
    let backend = MockBackend::new().with_outputs_unavailable("no outputs defined");
    let pinger = MockPinger::new();
    let mut pipeline =
        ValidationPipeline::new(Arc::new(backend.clone()), Arc::new(pinger.clone()));

    let result = pipeline.run().await;

    assert!(matches!(result, Err(CheckError::NoOutputs(_))));
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    assert!(pinger.probed().is_empty());
}

#[tokio::test]
async fn test_missing_resources_halt_before_probe_and_report() {
    let backend = MockBackend::new().with_outputs(json!({
        "vm_names": {"value": ["vm1", "vm2"]}
    }));
    let pinger = MockPinger::new();
    let mut pipeline =
        ValidationPipeline::new(Arc::new(backend.clone()), Arc::new(pinger.clone()));

    let result = pipeline.run().await;

    match result {
        Err(CheckError::MissingResources(keys)) => {
            assert_eq!(
                keys,
                vec![
                    "resource_group_name".to_string(),
                    "vm_public_ips".to_string(),
                    "vm_private_ips".to_string()
                ]
            );
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    assert!(pinger.probed().is_empty());
}

#[tokio::test]
async fn test_unreachable_fleet_still_reaches_done() {
    let backend = MockBackend::new().with_outputs(complete_outputs());
    // No addresses marked reachable: every probe fails.
    let pinger = MockPinger::new();
    let mut pipeline = ValidationPipeline::new(Arc::new(backend), Arc::new(pinger));

    let result = pipeline.run().await.unwrap();

    assert_eq!(pipeline.stage(), PipelineStage::Done);
    assert!(result
        .connectivity
        .iter()
        .all(|o| o.outcome == ProbeOutcome::Unreachable));
    assert!(result.report.contains("VALIDATION COMPLETED"));
}

#[tokio::test]
async fn test_absent_public_ips_pass_through() {
    let backend = MockBackend::new().with_outputs(json!({
        "resource_group_name": {"value": "rg"},
        "vm_names": {"value": ["vm1"]},
        "vm_public_ips": {"value": []},
        "vm_private_ips": {"value": ["10.0.0.4"]}
    }));
    let mut pipeline = ValidationPipeline::new(Arc::new(backend), Arc::new(MockPinger::new()));

    let result = pipeline.run().await.unwrap();

    assert_eq!(pipeline.stage(), PipelineStage::Done);
    assert!(result.connectivity.is_empty());
}

#[tokio::test]
async fn test_disabled_probe_marks_addresses_skipped() {
    let backend = MockBackend::new().with_outputs(complete_outputs());
    let pinger = MockPinger::new();
    let mut pipeline = ValidationPipeline::new(Arc::new(backend), Arc::new(pinger.clone()))
        .with_probe_disabled();

    let result = pipeline.run().await.unwrap();

    assert!(pinger.probed().is_empty());
    assert_eq!(result.connectivity.len(), 2);
    assert!(result
        .connectivity
        .iter()
        .all(|o| o.outcome == ProbeOutcome::Skipped));
}
