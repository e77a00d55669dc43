//! Validation pipeline state machine.
//!
//! Strict stage ordering is load-bearing: resource validation must never run
//! against state that failed to parse, and connectivity or reporting must
//! never be skipped because of an advisory probe failure.

use std::sync::Arc;

use tracing::info;

use provkit_backend::{state_is_valid, Backend};

use crate::connectivity::{ConnectivityProbe, Pinger, ProbeObservation};
use crate::error::{CheckError, CheckResult};
use crate::report::ProvisioningReport;
use crate::resources::{ResourceReport, ResourceValidator};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    FetchingState,
    FetchingOutputs,
    ValidatingResources,
    ProbingConnectivity,
    Reporting,
    Done,
    Failed,
}

impl PipelineStage {
    /// Check if transition to the given stage is valid.
    ///
    /// `Failed` is reachable only from the first three stages; the probe and
    /// report stages cannot fail by design.
    pub fn can_transition_to(&self, next: &PipelineStage) -> bool {
        use PipelineStage::*;
        matches!(
            (self, next),
            (FetchingState, FetchingOutputs)
                | (FetchingOutputs, ValidatingResources)
                | (ValidatingResources, ProbingConnectivity)
                | (ProbingConnectivity, Reporting)
                | (Reporting, Done)
                | (FetchingState, Failed)
                | (FetchingOutputs, Failed)
                | (ValidatingResources, Failed)
        )
    }

    /// The next stage on the success path.
    pub fn next(&self) -> Option<PipelineStage> {
        use PipelineStage::*;
        match self {
            FetchingState => Some(FetchingOutputs),
            FetchingOutputs => Some(ValidatingResources),
            ValidatingResources => Some(ProbingConnectivity),
            ProbingConnectivity => Some(Reporting),
            Reporting => Some(Done),
            Done | Failed => None,
        }
    }
}

/// Aggregate result of one pipeline run.
#[derive(Debug)]
pub struct ValidationResult {
    pub state_ok: bool,
    pub resources_ok: bool,
    pub resource_report: ResourceReport,
    pub connectivity: Vec<ProbeObservation>,
    pub report: String,
}

/// Orchestrator for the post-provisioning validation sequence.
pub struct ValidationPipeline {
    backend: Arc<dyn Backend>,
    pinger: Arc<dyn Pinger>,
    probe_enabled: bool,
    stage: PipelineStage,
}

impl ValidationPipeline {
    pub fn new(backend: Arc<dyn Backend>, pinger: Arc<dyn Pinger>) -> Self {
        Self {
            backend,
            pinger,
            probe_enabled: true,
            stage: PipelineStage::FetchingState,
        }
    }

    /// Mark probes as skipped instead of pinging.
    pub fn with_probe_disabled(mut self) -> Self {
        self.probe_enabled = false;
        self
    }

    /// The stage the pipeline is currently in (or ended in).
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Run the pipeline to a terminal stage.
    ///
    /// Fatal conditions return the corresponding [`CheckError`] and leave the
    /// pipeline in `Failed`; a full pass leaves it in `Done`.
    pub async fn run(&mut self) -> CheckResult<ValidationResult> {
        self.stage = PipelineStage::FetchingState;
        info!("Checking backend state");
        match self.backend.fetch_state().await {
            Ok(state) if state_is_valid(&state) => {}
            Ok(_) => return self.fail(CheckError::InvalidState(
                "state document has no root module".to_string(),
            )),
            Err(e) => return self.fail(CheckError::InvalidState(e.to_string())),
        }

        self.advance(PipelineStage::FetchingOutputs);
        info!("Retrieving backend outputs");
        let outputs = match self.backend.fetch_outputs().await {
            Ok(outputs) => outputs,
            Err(e) => return self.fail(CheckError::NoOutputs(e.to_string())),
        };

        self.advance(PipelineStage::ValidatingResources);
        info!("Validating provisioned resources");
        let resource_report = ResourceValidator::validate(&outputs);
        if !resource_report.passed {
            return self.fail(CheckError::MissingResources(resource_report.missing_keys()));
        }

        self.advance(PipelineStage::ProbingConnectivity);
        let connectivity = if self.probe_enabled {
            info!("Testing VM connectivity");
            ConnectivityProbe::probe_fleet(&outputs, self.pinger.as_ref()).await
        } else {
            info!("Connectivity probe disabled, marking addresses skipped");
            ConnectivityProbe::skip_fleet(&outputs)
        };

        self.advance(PipelineStage::Reporting);
        let report = ProvisioningReport::from_outputs(Some(&outputs)).render();

        self.advance(PipelineStage::Done);
        Ok(ValidationResult {
            state_ok: true,
            resources_ok: true,
            resource_report,
            connectivity,
            report,
        })
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(self.stage.can_transition_to(&next));
        self.stage = next;
    }

    fn fail<T>(&mut self, error: CheckError) -> CheckResult<T> {
        debug_assert!(self.stage.can_transition_to(&PipelineStage::Failed));
        self.stage = PipelineStage::Failed;
        Err(error)
    }
}
