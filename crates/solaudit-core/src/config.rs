//! Run configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::contract::EXAMPLE_CONTRACT;

/// Default Slither JSON output path.
pub const DEFAULT_SLITHER_OUTPUT: &str = "report.json";

/// Default merged report path.
pub const DEFAULT_REPORT_PATH: &str = "security_report.json";

/// Default per-analyzer timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Everything a single audit run needs.
///
/// Relative paths are resolved against `work_dir`, which is also the
/// directory the analyzers run in.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub work_dir: PathBuf,
    pub contract_source: String,
    pub report_path: PathBuf,
    pub slither_output: PathBuf,
    pub slither_bin: PathBuf,
    pub mythril_bin: PathBuf,
    pub timeout: Duration,
    pub open_report: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            contract_source: EXAMPLE_CONTRACT.to_string(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            slither_output: PathBuf::from(DEFAULT_SLITHER_OUTPUT),
            slither_bin: PathBuf::from("slither"),
            mythril_bin: PathBuf::from("myth"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            open_report: true,
        }
    }
}

impl AuditConfig {
    /// Create a config with defaults, rooted at `work_dir`.
    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    /// Working directory as an absolute path.
    ///
    /// Subprocesses run inside it, so every path handed to them must not
    /// depend on the parent's current directory.
    pub fn work_root(&self) -> PathBuf {
        std::path::absolute(&self.work_dir).unwrap_or_else(|_| self.work_dir.clone())
    }

    /// Resolve a path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_root().join(path)
        }
    }

    /// Resolve an executable the way a shell in the working directory would:
    /// bare names are left for `PATH` lookup, anything with a separator is a
    /// path relative to the working directory.
    pub fn resolve_program(&self, program: &Path) -> PathBuf {
        if program.components().count() > 1 || program.is_absolute() {
            self.resolve(program)
        } else {
            program.to_path_buf()
        }
    }

    /// Absolute-or-workdir-relative location of the merged report.
    pub fn report_file(&self) -> PathBuf {
        self.resolve(&self.report_path)
    }

    /// Location Slither is asked to write its JSON to.
    pub fn slither_output_file(&self) -> PathBuf {
        self.resolve(&self.slither_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.slither_output, PathBuf::from("report.json"));
        assert_eq!(config.report_path, PathBuf::from("security_report.json"));
        assert_eq!(config.slither_bin, PathBuf::from("slither"));
        assert_eq!(config.mythril_bin, PathBuf::from("myth"));
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.open_report);
        assert_eq!(config.contract_source, EXAMPLE_CONTRACT);
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_paths_resolve_against_work_dir() {
        let config = AuditConfig::in_dir("/tmp/audit");
        assert_eq!(config.report_file(), PathBuf::from("/tmp/audit/security_report.json"));
        assert_eq!(config.slither_output_file(), PathBuf::from("/tmp/audit/report.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_paths_are_kept() {
        let mut config = AuditConfig::in_dir("/tmp/audit");
        config.report_path = PathBuf::from("/var/reports/out.json");
        assert_eq!(config.report_file(), PathBuf::from("/var/reports/out.json"));
    }

    #[test]
    fn test_relative_work_dir_resolves_to_absolute_paths() {
        let config = AuditConfig::in_dir("proj");
        let cwd = std::env::current_dir().unwrap();

        assert!(config.work_root().is_absolute());
        assert_eq!(config.work_root(), cwd.join("proj"));
        assert_eq!(config.slither_output_file(), cwd.join("proj").join("report.json"));
        assert_eq!(config.report_file(), cwd.join("proj").join("security_report.json"));
    }

    #[test]
    fn test_program_resolution() {
        let config = AuditConfig::in_dir("proj");
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(config.resolve_program(Path::new("slither")), PathBuf::from("slither"));
        assert_eq!(
            config.resolve_program(Path::new("bin/slither")),
            cwd.join("proj").join("bin/slither")
        );
    }
}
