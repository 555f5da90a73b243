//! solaudit core library
//!
//! Runs Slither and Mythril against a Solidity contract and merges their
//! JSON output into a single security report.

pub mod analyzer;
pub mod config;
pub mod contract;
pub mod error;
pub mod opener;
pub mod pipeline;
pub mod report;
pub mod staging;
pub mod tools;

pub use analyzer::{run_mythril, run_slither, Tool};
pub use config::AuditConfig;
pub use error::{AuditError, AuditResult};
pub use opener::OpenOutcome;
pub use pipeline::{run_audit, AuditEvent};
pub use report::{AnalysisResult, SecurityReport};
