//! Slither and Mythril invocation.
//!
//! Both analyzers run as subprocesses against a staged copy of the contract.
//! Whatever goes wrong (missing binary, crash, garbage output, timeout) is
//! folded into the returned [`AnalysisResult`] instead of bubbling up, so a
//! report is always produced.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::process::{Output, Stdio};

use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::report::{error_result, AnalysisResult};
use crate::staging::StagedContract;

/// The external analyzers solaudit drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Slither,
    Mythril,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Slither, Tool::Mythril];

    /// Display name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Slither => "Slither",
            Tool::Mythril => "Mythril",
        }
    }

    /// Executable configured for this tool.
    pub fn program<'a>(&self, config: &'a AuditConfig) -> &'a Path {
        match self {
            Tool::Slither => &config.slither_bin,
            Tool::Mythril => &config.mythril_bin,
        }
    }

    /// Run this tool against `source`.
    pub async fn run(&self, source: &str, config: &AuditConfig) -> AnalysisResult {
        match self {
            Tool::Slither => run_slither(source, config).await,
            Tool::Mythril => run_mythril(source, config).await,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload returned when an analyzer exceeds its time budget.
pub fn timeout_result(tool: Tool, timeout_secs: u64) -> AnalysisResult {
    let mut result = error_result(format!(
        "{} analysis timed out after {}s",
        tool.name(),
        timeout_secs
    ));
    result.insert("timed_out".to_string(), Value::Bool(true));
    result.insert("timeout_secs".to_string(), Value::from(timeout_secs));
    result
}

/// Run Slither: `slither <file> --json <output>`, then read `<output>`.
pub async fn run_slither(source: &str, config: &AuditConfig) -> AnalysisResult {
    settle(Tool::Slither, slither_inner(source, config).await)
}

/// Run Mythril: `myth analyze <file> -o json`, reading JSON from stdout.
pub async fn run_mythril(source: &str, config: &AuditConfig) -> AnalysisResult {
    settle(Tool::Mythril, mythril_inner(source, config).await)
}

async fn slither_inner(source: &str, config: &AuditConfig) -> AuditResult<AnalysisResult> {
    let output_file = config.slither_output_file();

    // Slither refuses to overwrite its --json target
    match tokio::fs::remove_file(&output_file).await {
        Ok(()) => debug!(path = %output_file.display(), "Removed stale Slither output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let staged = StagedContract::write(source)?;
    let args = [
        staged.path().as_os_str(),
        OsStr::new("--json"),
        output_file.as_os_str(),
    ];
    execute(Tool::Slither, config, &args).await?;

    if !output_file.exists() {
        return Ok(error_result(format!(
            "Slither output file not found: {}",
            config.slither_output.display()
        )));
    }

    let content = tokio::fs::read_to_string(&output_file).await?;
    parse_object(&content)
}

async fn mythril_inner(source: &str, config: &AuditConfig) -> AuditResult<AnalysisResult> {
    let staged = StagedContract::write(source)?;
    let args = [
        OsStr::new("analyze"),
        staged.path().as_os_str(),
        OsStr::new("-o"),
        OsStr::new("json"),
    ];
    let output = execute(Tool::Mythril, config, &args).await?;

    let stdout = String::from_utf8(output.stdout)?;
    if stdout.trim().is_empty() {
        return Ok(error_result("No Mythril output"));
    }

    parse_object(&stdout)
}

/// Launch `tool` with `args`, bounded by the configured timeout.
///
/// The exit status is logged but not judged: Mythril exits non-zero when it
/// finds issues, and Slither does the same when detectors fire.
async fn execute(tool: Tool, config: &AuditConfig, args: &[&OsStr]) -> AuditResult<Output> {
    let program = tool.program(config);
    let resolved = config.resolve_program(program);
    let work_root = config.work_root();
    debug!(
        tool = tool.name(),
        program = %resolved.display(),
        work_dir = %work_root.display(),
        ?args,
        "Launching analyzer"
    );

    let mut cmd = Command::new(&resolved);
    cmd.args(args)
        .current_dir(&work_root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(config.timeout, cmd.output()).await {
        Ok(result) => result.map_err(|source| AuditError::ToolLaunch {
            program: program.display().to_string(),
            source,
        })?,
        Err(_) => return Err(AuditError::Timeout(config.timeout.as_secs())),
    };

    debug!(
        tool = tool.name(),
        status = %output.status,
        stdout_bytes = output.stdout.len(),
        stderr = %String::from_utf8_lossy(&output.stderr).trim(),
        "Analyzer exited"
    );
    Ok(output)
}

/// Parse tool output, insisting on a top-level JSON object.
fn parse_object(text: &str) -> AuditResult<AnalysisResult> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(AuditError::UnexpectedOutput(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fold an invocation outcome into the result stored in the report.
fn settle(tool: Tool, outcome: AuditResult<AnalysisResult>) -> AnalysisResult {
    match outcome {
        Ok(result) => result,
        Err(AuditError::Timeout(secs)) => {
            warn!(tool = tool.name(), secs, "Analyzer timed out");
            timeout_result(tool, secs)
        }
        Err(e) => {
            warn!(tool = tool.name(), error = %e, "Analyzer failed");
            error_result(format!("{} analysis failed: {}", tool.name(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_accepts_objects() {
        let parsed = parse_object(r#"{"success": true, "issues": []}"#).unwrap();
        assert_eq!(parsed.get("success"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_parse_object_rejects_arrays() {
        let err = parse_object("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, got an array");
    }

    #[test]
    fn test_parse_object_rejects_garbage() {
        assert!(matches!(parse_object("not json"), Err(AuditError::Json(_))));
    }

    #[test]
    fn test_timeout_payload() {
        let result = timeout_result(Tool::Mythril, 30);
        assert_eq!(
            Value::Object(result),
            json!({
                "error": "Mythril analysis timed out after 30s",
                "timed_out": true,
                "timeout_secs": 30
            })
        );
    }

    #[test]
    fn test_settle_formats_failures() {
        let result = settle(Tool::Slither, Err(AuditError::UnexpectedOutput("null")));
        assert_eq!(
            Value::Object(result),
            json!({"error": "Slither analysis failed: expected a JSON object, got null"})
        );
    }

    #[test]
    fn test_settle_passes_results_through() {
        let ok = error_result("Slither output file not found: report.json");
        assert_eq!(settle(Tool::Slither, Ok(ok.clone())), ok);
    }

    #[test]
    fn test_tool_programs_come_from_config() {
        let config = AuditConfig::default();
        assert_eq!(Tool::Slither.program(&config), Path::new("slither"));
        assert_eq!(Tool::Mythril.program(&config), Path::new("myth"));
    }

    #[tokio::test]
    async fn test_missing_binary_becomes_error_payload() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AuditConfig::in_dir(dir.path());
        config.mythril_bin = dir.path().join("no-such-myth");

        let result = run_mythril("contract A {}", &config).await;
        let message = crate::report::error_message(&result).unwrap();
        assert!(message.starts_with("Mythril analysis failed: failed to launch"));
    }
}
