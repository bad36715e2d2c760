//! Console output formatter for escalation reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use qsa_domain::EscalationReport;

/// Formats escalation reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the single status line
    ///
    /// Left uncolored so the line is stable for scripts and logs.
    pub fn format_status(report: &EscalationReport) -> String {
        report.status_line()
    }

    /// Format the complete report with modes and the per-stage trace
    pub fn format_trace(report: &EscalationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Sentinel Escalation Report"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), report.query));

        output.push_str(&Self::section_header("Cognition Modes"));
        for (tag, entry) in report.modes.iter() {
            output.push_str(&format!("  {}. {}\n", tag, entry));
        }

        output.push_str(&Self::section_header("Escalation Trace"));
        for trace in &report.trace {
            let verdict = if trace.consensus {
                "consensus".green().bold().to_string()
            } else {
                "escalating".yellow().to_string()
            };
            let disposition = trace
                .disposition
                .map(|d| format!(" ({})", d))
                .unwrap_or_default();
            output.push_str(&format!(
                "  depth {:>2}  {:<22} {:>7.3}  {}{}\n",
                trace.depth,
                trace.stage,
                trace.trueness,
                verdict,
                disposition
            ));
        }

        output.push_str(&Self::footer());
        output.push_str(&report.status_line());
        output.push('\n');

        output
    }

    /// Format as JSON
    pub fn format_json(report: &EscalationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_status(&self, report: &EscalationReport) -> String {
        Self::format_status(report)
    }

    fn format_trace(&self, report: &EscalationReport) -> String {
        Self::format_trace(report)
    }

    fn format_json(&self, report: &EscalationReport) -> String {
        Self::format_json(report)
    }
}
