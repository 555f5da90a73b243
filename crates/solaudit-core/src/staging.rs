//! Temporary `.sol` files handed to the analyzers.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::AuditResult;

/// A contract source written to a uniquely named `.sol` temp file.
///
/// The file is removed when this value is dropped.
#[derive(Debug)]
pub struct StagedContract {
    file: NamedTempFile,
}

impl StagedContract {
    /// Write `source` to a fresh temp file.
    pub fn write(source: &str) -> AuditResult<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("solaudit-")
            .suffix(".sol")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;

        debug!(path = %file.path().display(), bytes = source.len(), "Staged contract");
        Ok(Self { file })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
