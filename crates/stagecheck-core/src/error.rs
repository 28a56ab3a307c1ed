// Rust guideline compliant 2026-02-06

//! Error types for the Stagecheck core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code used for failures that carry no code of their own.
pub const INFRASTRUCTURE_EXIT_CODE: i32 = 2;

/// Error types for Stagecheck operations.
///
/// None of these describe content violations; a file with a bad header or
/// misordered imports is an ordinary result, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    Config(String),

    /// The required header file does not exist in the working tree.
    #[error("Required header not found: {}", .0.display())]
    HeaderMissing(PathBuf),

    /// A repository query failed.
    #[error("{command} failed, bailing")]
    QueryFailed {
        /// The query, rendered as the equivalent git command line.
        command: String,
        /// Exit code to propagate.
        code: i32,
    },

    /// Git operation error outside of a staged-content query.
    #[error("Git error: {0}")]
    Git(String),
}

impl Error {
    /// Returns the process exit code this error should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::QueryFailed { code, .. } => *code,
            _ => INFRASTRUCTURE_EXIT_CODE,
        }
    }
}
