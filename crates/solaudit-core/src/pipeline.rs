//! End-to-end audit run.
//!
//! Slither, then Mythril, then the merged report, then the viewer. The
//! caller decides how each step is presented through [`AuditEvent`]s.

use std::path::PathBuf;

use tracing::info;

use crate::analyzer::Tool;
use crate::config::AuditConfig;
use crate::error::AuditResult;
use crate::opener::{open_report, OpenOutcome};
use crate::report::{error_message, SecurityReport};

/// Progress notifications emitted by [`run_audit`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuditEvent {
    AnalyzerStarted(Tool),
    AnalyzerFinished { tool: Tool, error: Option<String> },
    ReportWritten(PathBuf),
    Completed(PathBuf),
    ReportOpened(OpenOutcome),
}

/// Run both analyzers, write the merged report and optionally open it.
///
/// Analyzer failures end up inside the report. The only error returned is a
/// failure to write the report itself.
pub async fn run_audit<F>(config: &AuditConfig, mut on_event: F) -> AuditResult<SecurityReport>
where
    F: FnMut(AuditEvent),
{
    let source = config.contract_source.as_str();

    on_event(AuditEvent::AnalyzerStarted(Tool::Slither));
    let slither = Tool::Slither.run(source, config).await;
    on_event(AuditEvent::AnalyzerFinished {
        tool: Tool::Slither,
        error: error_message(&slither).map(str::to_string),
    });

    on_event(AuditEvent::AnalyzerStarted(Tool::Mythril));
    let mythril = Tool::Mythril.run(source, config).await;
    on_event(AuditEvent::AnalyzerFinished {
        tool: Tool::Mythril,
        error: error_message(&mythril).map(str::to_string),
    });

    let report = SecurityReport::new(slither, mythril);
    let report_file = config.report_file();
    report.write(&report_file).await?;
    info!(path = %report_file.display(), "Security report generated");

    on_event(AuditEvent::ReportWritten(report_file.clone()));
    on_event(AuditEvent::Completed(report_file.clone()));

    if config.open_report {
        let outcome = open_report(&report_file).await;
        on_event(AuditEvent::ReportOpened(outcome));
    }

    Ok(report)
}
