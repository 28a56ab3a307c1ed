// Rust guideline compliant 2026-02-06

//! Stagecheck Core Library
//!
//! This crate provides the checks run against staged source files:
//! - Required header matching
//! - Canonical import ordering
//! - Violation aggregation and remediation reporting
//! - Configuration loading and error types

pub mod config;
pub mod error;
pub mod header;
pub mod imports;
pub mod report;

pub use config::{Backend, Config, ToolLayout};
pub use error::{Error, Result};
pub use header::RequiredHeader;
pub use imports::{find_ordering, ImportGroups, OrderingCheck, OrderingReport};
pub use report::{check_file, FileReport, Remediation, ViolationSet};

/// A file as it exists in the index, split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Repository-relative path.
    pub path: String,
    /// Staged content, one entry per line without the line terminator.
    pub blob_content: Vec<String>,
}

/// Splits raw blob content into lines.
///
/// Lines are split on `\n` only; a trailing newline does not produce an
/// extra empty line and `\r` is kept so CRLF content differs from LF content.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    if content.ends_with('\n') || content.is_empty() {
        lines.pop();
    }
    lines
}
