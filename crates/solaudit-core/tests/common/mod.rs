//! Stub analyzers for integration tests.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use solaudit_core::AuditConfig;
use tempfile::TempDir;

/// Write an executable shell script named `name` into `dir`.
pub fn stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Slither stand-in that writes `json` to its `--json` target.
pub fn slither_writing(dir: &Path, json: &str) -> PathBuf {
    stub(dir, "slither", &format!("printf '%s' '{}' > \"$3\"", json))
}

/// Mythril stand-in that prints `json` on stdout.
pub fn mythril_printing(dir: &Path, json: &str) -> PathBuf {
    stub(dir, "myth", &format!("printf '%s' '{}'", json))
}

/// Scratch workspace with stubs in `bin/` and the run rooted at `work/`.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("bin")).unwrap();
        std::fs::create_dir(root.path().join("work")).unwrap();
        Self { root }
    }

    pub fn bin(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Config pointing at stubs that don't exist yet and never opening the report.
    pub fn config(&self) -> AuditConfig {
        let mut config = AuditConfig::in_dir(self.work());
        config.slither_bin = self.bin().join("slither");
        config.mythril_bin = self.bin().join("myth");
        config.timeout = Duration::from_secs(20);
        config.open_report = false;
        config
    }
}
