//! Best-effort connectivity probing.
//!
//! Probing is advisory only: firewalls commonly drop ICMP without indicating
//! a real provisioning defect, so an unreachable host is logged and recorded
//! but never fails the run.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::process::Command;
use tracing::{info, warn};

use provkit_backend::{keys, BackendOutputs};

/// Outcome of probing a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
    Skipped,
}

/// One probed address and what happened.
#[derive(Debug, Clone)]
pub struct ProbeObservation {
    pub address: String,
    pub outcome: ProbeOutcome,
}

/// Reachability check against a single address.
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn ping(&self, address: &str) -> bool;
}

/// Pinger backed by the system `ping` binary: one packet, two second wait.
pub struct IcmpPinger;

#[async_trait]
impl Pinger for IcmpPinger {
    async fn ping(&self, address: &str) -> bool {
        let result = Command::new("ping")
            .args(["-c", "1", "-W", "2", address])
            .output()
            .await;

        match result {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}

/// Scripted pinger for tests; records every probed address.
#[derive(Clone, Default)]
pub struct MockPinger {
    reachable: Arc<RwLock<Vec<String>>>,
    probed: Arc<RwLock<Vec<String>>>,
}

impl MockPinger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an address as reachable.
    pub fn reachable(self, address: impl Into<String>) -> Self {
        self.reachable.write().push(address.into());
        self
    }

    /// Addresses probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.read().clone()
    }
}

#[async_trait]
impl Pinger for MockPinger {
    async fn ping(&self, address: &str) -> bool {
        self.probed.write().push(address.to_string());
        self.reachable.read().iter().any(|a| a == address)
    }
}

/// Fleet-wide connectivity probe over the `vm_public_ips` output.
pub struct ConnectivityProbe;

impl ConnectivityProbe {
    /// Probe every public address in order.
    ///
    /// Infallible by contract: a missing `vm_public_ips` output skips the
    /// probe entirely, and unreachable hosts are warnings, not failures.
    pub async fn probe_fleet(outputs: &BackendOutputs, pinger: &dyn Pinger) -> Vec<ProbeObservation> {
        let Some(addresses) = outputs.list_value(keys::VM_PUBLIC_IPS) else {
            info!("Skipping connectivity test - no public IPs found");
            return Vec::new();
        };

        let mut observations = Vec::with_capacity(addresses.len());
        for (i, address) in addresses.iter().enumerate() {
            info!("Testing VM {} ({})", i + 1, address);
            let outcome = if pinger.ping(address).await {
                info!("VM {} is reachable", i + 1);
                ProbeOutcome::Reachable
            } else {
                warn!("VM {} is not responding to ping (may be firewall)", i + 1);
                ProbeOutcome::Unreachable
            };
            observations.push(ProbeObservation {
                address: address.clone(),
                outcome,
            });
        }
        observations
    }

    /// Record every address as skipped without probing.
    pub fn skip_fleet(outputs: &BackendOutputs) -> Vec<ProbeObservation> {
        outputs
            .list_value(keys::VM_PUBLIC_IPS)
            .unwrap_or_default()
            .into_iter()
            .map(|address| ProbeObservation {
                address,
                outcome: ProbeOutcome::Skipped,
            })
            .collect()
    }
}
