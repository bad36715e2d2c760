//! Escalation result types - immutable outputs of a completed run.
//!
//! - [`StageTrace`] - one evaluated stage: depth, name, verdict
//! - [`ResolutionStatus`] - how the escalation ended
//! - [`EscalationReport`] - the complete result, including the status line

use crate::cognition::ModeMap;
use crate::sentinel::disposition::Disposition;
use serde::{Deserialize, Serialize};

/// How an escalation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// A stage declared consensus
    Resolved,
    /// The depth bound was exhausted without consensus
    MaxDepthReached,
}

impl ResolutionStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionStatus::Resolved)
    }
}

impl std::fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionStatus::Resolved => write!(f, "RESOLVED"),
            ResolutionStatus::MaxDepthReached => write!(f, "ESCALATED TO MAX DEPTH"),
        }
    }
}

/// Record of one evaluated stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTrace {
    /// Depth counter when the stage ran
    pub depth: usize,
    /// Stage display name
    pub stage: String,
    /// Trueness the stage reported
    pub trueness: f64,
    /// Whether the stage declared consensus
    pub consensus: bool,
    /// Disposition label, if the stage attached one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
}

impl StageTrace {
    pub fn new(depth: usize, stage: impl Into<String>, trueness: f64, consensus: bool) -> Self {
        Self {
            depth,
            stage: stage.into(),
            trueness,
            consensus,
            disposition: None,
        }
    }

    pub fn with_disposition(mut self, disposition: Option<Disposition>) -> Self {
        self.disposition = disposition;
        self
    }
}

/// Complete result of one escalation run
///
/// # Example
///
/// ```
/// use qsa_domain::{EscalationReport, ModeMap, Query, ResolutionStatus, StageTrace};
///
/// let query = Query::new("test");
/// let report = EscalationReport {
///     query: query.content().to_string(),
///     status: ResolutionStatus::Resolved,
///     trueness: 0.812,
///     final_depth: 5,
///     modes: ModeMap::from_query(&query),
///     trace: vec![StageTrace::new(5, "initial mediation", 0.812, true)],
///     latency_ms: 3.2,
/// };
/// assert_eq!(
///     report.status_line(),
///     "QSA RESOLVED | Trueness: 0.812 | Latency: 3.2 ms"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationReport {
    /// The escalated query
    pub query: String,
    /// How the run ended
    pub status: ResolutionStatus,
    /// Final trueness value
    pub trueness: f64,
    /// Depth counter at termination
    pub final_depth: usize,
    /// Cognition mode report from the last mediation pass
    pub modes: ModeMap,
    /// Every evaluated stage, in order, starting with initial mediation
    pub trace: Vec<StageTrace>,
    /// Wall-clock duration of the run in milliseconds
    pub latency_ms: f64,
}

impl EscalationReport {
    /// The single-line status summary
    pub fn status_line(&self) -> String {
        format!(
            "QSA {} | Trueness: {:.3} | Latency: {:.1} ms",
            self.status, self.trueness, self.latency_ms
        )
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }
}
