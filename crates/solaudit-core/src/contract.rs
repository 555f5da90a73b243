//! Contract sources fed to the analyzers.

use std::path::Path;

use crate::error::{AuditError, AuditResult};

/// Multi-signature wallet used when no contract file is given.
pub const EXAMPLE_CONTRACT: &str = include_str!("../contracts/MultiSigWallet.sol");

/// Read a contract source from disk.
///
/// The content is passed to the analyzers as-is; nothing here checks that
/// it is valid Solidity.
pub fn load_contract(path: &Path) -> AuditResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AuditError::config(format!("cannot read contract {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_contract_is_embedded() {
        assert!(EXAMPLE_CONTRACT.starts_with("// SPDX-License-Identifier: MIT"));
        assert!(EXAMPLE_CONTRACT.contains("contract MultiSigWallet"));
    }

    #[test]
    fn test_load_contract_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Token.sol");
        std::fs::write(&path, "contract Token {}").unwrap();

        assert_eq!(load_contract(&path).unwrap(), "contract Token {}");
    }

    #[test]
    fn test_load_contract_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_contract(&dir.path().join("Missing.sol")).unwrap_err();

        assert!(matches!(err, AuditError::Config(_)));
        assert!(err.to_string().contains("Missing.sol"));
    }
}
