//! Analyzer availability checks.

use std::path::PathBuf;

use crate::analyzer::Tool;
use crate::config::AuditConfig;

/// Where (if anywhere) a configured analyzer executable was found.
#[derive(Debug, Clone)]
pub struct ToolStatus {
    pub tool: Tool,
    pub program: PathBuf,
    pub resolved: Option<PathBuf>,
}

impl ToolStatus {
    pub fn is_installed(&self) -> bool {
        self.resolved.is_some()
    }
}

/// Resolve every analyzer the way the subprocess launch would.
pub fn check_tools(config: &AuditConfig) -> Vec<ToolStatus> {
    let search_path = std::env::var_os("PATH");

    Tool::ALL
        .iter()
        .map(|&tool| {
            let program = tool.program(config).to_path_buf();
            let resolved = which::which_in(&program, search_path.as_ref(), config.work_root()).ok();
            ToolStatus {
                tool,
                program,
                resolved,
            }
        })
        .collect()
}
