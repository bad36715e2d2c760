//! Output formatter abstraction

use qsa_domain::EscalationReport;

/// Formats escalation reports for display
pub trait OutputFormatter {
    /// The single status line
    fn format_status(&self, report: &EscalationReport) -> String;
    /// Full decorated trace
    fn format_trace(&self, report: &EscalationReport) -> String;
    /// JSON rendering
    fn format_json(&self, report: &EscalationReport) -> String;
}
