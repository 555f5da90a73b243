//! Open the report with the platform's default viewer.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

/// Host OS classes with distinct "open file" commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Program and arguments that open `path` in the default application.
    pub fn open_command(&self, path: &Path) -> (&'static str, Vec<OsString>) {
        let target = path.as_os_str().to_os_string();
        match self {
            Platform::MacOs => ("open", vec![target]),
            // `start` is a cmd builtin; the empty string is the window title
            Platform::Windows => (
                "cmd",
                vec!["/C".into(), "start".into(), "".into(), target],
            ),
            Platform::Unix => ("xdg-open", vec![target]),
        }
    }
}

/// What happened when we tried to open the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    Missing,
    Failed(String),
}

/// Open `path` with the current platform's viewer. Never fails the run.
pub async fn open_report(path: &Path) -> OpenOutcome {
    open_with(Platform::current(), path).await
}

/// Open `path` using the command for `platform`.
pub async fn open_with(platform: Platform, path: &Path) -> OpenOutcome {
    if !path.exists() {
        return OpenOutcome::Missing;
    }

    let (program, args) = platform.open_command(path);
    launch(program, &args).await
}

/// Run a viewer command and classify the result.
async fn launch(program: &str, args: &[OsString]) -> OpenOutcome {
    debug!(program, ?args, "Opening report");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(s) if s.success() => OpenOutcome::Opened,
        Ok(s) => {
            warn!(program, status = %s, "Report viewer exited unsuccessfully");
            OpenOutcome::Failed(format!("{} exited with {}", program, s))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(program, "Report viewer not installed");
            OpenOutcome::Failed(format!("{} not found", program))
        }
        Err(e) => {
            warn!(program, error = %e, "Could not launch report viewer");
            OpenOutcome::Failed(format!("failed to run {}: {}", program, e))
        }
    }
}
