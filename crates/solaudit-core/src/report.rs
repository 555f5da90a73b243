//! Merged security report.
//!
//! Each analyzer contributes one JSON object. The merged report always
//! carries both, failures included, so consumers never have to handle a
//! missing key.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AuditError, AuditResult};

/// Output of a single analyzer run: the tool's JSON object, or an
/// `{"error": ...}` payload.
pub type AnalysisResult = Map<String, Value>;

/// Build the `{"error": message}` payload.
pub fn error_result(message: impl Into<String>) -> AnalysisResult {
    let mut result = Map::new();
    result.insert("error".to_string(), Value::String(message.into()));
    result
}

/// Error message carried by a result, if it is an error payload.
pub fn error_message(result: &AnalysisResult) -> Option<&str> {
    result.get("error").and_then(Value::as_str)
}

/// Report combining both analyzers. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub slither: AnalysisResult,
    pub mythril: AnalysisResult,
}

impl SecurityReport {
    pub fn new(slither: AnalysisResult, mythril: AnalysisResult) -> Self {
        Self { slither, mythril }
    }

    /// Serialize with 4-space indentation.
    pub fn to_json_pretty(&self) -> AuditResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');

        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the report to `path`, replacing any previous report.
    pub async fn write(&self, path: &Path) -> AuditResult<()> {
        let content = self.to_json_pretty()?;
        tokio::fs::write(path, content)
            .await
            .map_err(|source| AuditError::ReportWrite {
                path: path.display().to_string(),
                source,
            })?;

        debug!(path = %path.display(), "Security report written");
        Ok(())
    }
}
