//! Terminal output formatting.

use colored::Colorize;
use solaudit_core::{AuditEvent, OpenOutcome};

/// Print the status line for a pipeline event.
pub fn print_event(event: &AuditEvent) {
    match event {
        AuditEvent::AnalyzerStarted(tool) => {
            println!("{}", format!("Running {}...", tool).bold());
        }
        AuditEvent::AnalyzerFinished { tool, error: None } => {
            println!("  {} {} finished", "✓".green(), tool);
        }
        AuditEvent::AnalyzerFinished { tool, error: Some(message) } => {
            println!("  {} {}: {}", "⚠".yellow(), tool, message.yellow());
        }
        AuditEvent::ReportWritten(path) => {
            println!("Security report generated: {}", path.display().to_string().cyan());
        }
        AuditEvent::Completed(path) => {
            println!(
                "{} Check {} for details.",
                "Analysis complete.".green().bold(),
                path.display()
            );
        }
        AuditEvent::ReportOpened(OpenOutcome::Opened) => {}
        AuditEvent::ReportOpened(OpenOutcome::Missing) => {
            println!("{}", "Security report file not found.".yellow());
        }
        AuditEvent::ReportOpened(OpenOutcome::Failed(reason)) => {
            println!("  {} Could not open report: {}", "⚠".yellow(), reason.dimmed());
        }
    }
}
