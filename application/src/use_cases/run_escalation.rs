//! Run escalation use case
//!
//! Orchestrates the full escalation flow: initial mediation, then the
//! ladder stages in order until consensus or depth exhaustion.

use crate::config::EscalationParams;
use crate::ports::observer::{EscalationObserver, NoObserver};
use qsa_domain::{
    DomainError, EscalationLadder, EscalationReport, EntropySource, INITIAL_DEPTH, Mediator,
    Query, ResolutionStatus, StageContext, StageTrace,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Name used for the mediation entry in traces
const MEDIATION_STAGE_NAME: &str = "initial mediation";

/// Errors that can occur during escalation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunEscalationError {
    #[error("Max depth {requested} exceeds the ladder ceiling of {ceiling}")]
    DepthOutOfRange { requested: usize, ceiling: usize },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Input for the RunEscalation use case
#[derive(Debug, Clone)]
pub struct RunEscalationInput {
    /// The query to escalate
    pub query: Query,
    /// Loop control parameters
    pub params: EscalationParams,
}

impl RunEscalationInput {
    pub fn new(query: impl Into<Query>) -> Self {
        Self {
            query: query.into(),
            params: EscalationParams::default(),
        }
    }

    pub fn with_params(mut self, params: EscalationParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for escalating a query through the sentinel ladder
///
/// Owns the ladder and the injected entropy source; each execution is
/// independent and carries its own state from mediation to termination.
pub struct RunEscalationUseCase {
    entropy: Arc<dyn EntropySource>,
    ladder: EscalationLadder,
}

impl RunEscalationUseCase {
    /// Create the use case with the standard ladder
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self {
            entropy,
            ladder: EscalationLadder::standard(),
        }
    }

    /// Replace the ladder (shortened or reordered stage lists)
    pub fn with_ladder(mut self, ladder: EscalationLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(
        &self,
        input: RunEscalationInput,
    ) -> Result<EscalationReport, RunEscalationError> {
        self.execute_with_observer(input, &NoObserver)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_observer(
        &self,
        input: RunEscalationInput,
        observer: &dyn EscalationObserver,
    ) -> Result<EscalationReport, RunEscalationError> {
        let params = input.params;
        let ceiling = self.ladder.ceiling();
        if params.max_depth > ceiling {
            return Err(RunEscalationError::DepthOutOfRange {
                requested: params.max_depth,
                ceiling,
            });
        }

        let started = Instant::now();
        info!(
            "Escalating query (max depth {}, threshold {})",
            params.max_depth, params.mediation_threshold
        );
        observer.on_escalation_start(&input.query, params.max_depth);

        let mediator = Mediator::new(params.mediation_threshold);
        let mediation = mediator.mediate(&input.query, self.entropy.as_ref())?;

        let mut scores = mediation.scores;
        let mut modes = mediation.modes;
        let mut trueness = mediation.verdict.trueness;
        let mut consensus = mediation.verdict.consensus;
        let mut depth = INITIAL_DEPTH;

        let mut trace = vec![
            StageTrace::new(depth, MEDIATION_STAGE_NAME, trueness, consensus)
                .with_disposition(mediation.verdict.disposition),
        ];
        observer.on_stage_evaluated(&trace[0]);

        while !consensus && depth < params.max_depth {
            depth += 1;
            // Validation above guarantees a stage exists for every depth
            // the loop can reach
            let Some(stage) = self.ladder.stage_for_depth(depth) else {
                break;
            };

            let ctx = StageContext {
                query: &input.query,
                scores: &scores,
                trueness,
                depth,
            };
            let outcome = stage.evaluate(&ctx, self.entropy.as_ref())?;

            trueness = outcome.verdict.trueness;
            consensus = outcome.verdict.consensus;
            if let Some(replacement) = outcome.scores {
                scores = replacement;
            }
            if let Some(replacement) = outcome.modes {
                modes = replacement;
            }

            debug!(
                "depth {} {}: trueness {:.3}, consensus {}",
                depth,
                stage.name(),
                trueness,
                consensus
            );
            let entry = StageTrace::new(depth, stage.name(), trueness, consensus)
                .with_disposition(outcome.verdict.disposition);
            observer.on_stage_evaluated(&entry);
            trace.push(entry);
        }

        let status = if consensus {
            ResolutionStatus::Resolved
        } else {
            ResolutionStatus::MaxDepthReached
        };
        let report = EscalationReport {
            query: input.query.into_content(),
            status,
            trueness,
            final_depth: depth,
            modes,
            trace,
            latency_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        info!("Escalation {}: trueness {:.3}", report.status, report.trueness);
        observer.on_escalation_complete(&report);
        Ok(report)
    }
}
