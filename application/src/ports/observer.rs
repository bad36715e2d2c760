//! Escalation observation port
//!
//! Defines the interface for reporting progress during an escalation run.

use qsa_domain::{EscalationReport, Query, StageTrace};

/// Callback for progress updates during an escalation run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, logs, etc.)
pub trait EscalationObserver: Send + Sync {
    /// Called once before initial mediation runs
    fn on_escalation_start(&self, query: &Query, max_depth: usize);

    /// Called after each stage evaluation, initial mediation included
    fn on_stage_evaluated(&self, trace: &StageTrace);

    /// Called once when the run terminates
    fn on_escalation_complete(&self, report: &EscalationReport);
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl EscalationObserver for NoObserver {
    fn on_escalation_start(&self, _query: &Query, _max_depth: usize) {}
    fn on_stage_evaluated(&self, _trace: &StageTrace) {}
    fn on_escalation_complete(&self, _report: &EscalationReport) {}
}
