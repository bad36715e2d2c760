//! Console progress reporting for escalation runs

use colored::Colorize;
use qsa_application::EscalationObserver;
use qsa_domain::{EscalationReport, Query, StageTrace};

/// Prints one line per evaluated stage as the escalation runs
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl EscalationObserver for ConsoleObserver {
    fn on_escalation_start(&self, query: &Query, max_depth: usize) {
        eprintln!(
            "{}",
            format!("Escalating \"{}\" (max depth {})", query, max_depth).dimmed()
        );
    }

    fn on_stage_evaluated(&self, trace: &StageTrace) {
        let verdict = if trace.consensus {
            "consensus".green().bold().to_string()
        } else {
            "escalating".yellow().to_string()
        };
        let disposition = trace
            .disposition
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        eprintln!(
            "  depth {:>2}  {:<22} {:>7.3}  {}{}",
            trace.depth, trace.stage, trace.trueness, verdict, disposition
        );
    }

    fn on_escalation_complete(&self, _report: &EscalationReport) {
        eprintln!();
    }
}
