// Rust guideline compliant 2026-02-06

//! Stagecheck Git Hooks
//!
//! This crate provides the pre-commit gate:
//! - Repository queries against the index (libgit2, `git` subprocesses, in-memory)
//! - Staged content scanning and remediation reporting
//! - Diagnostic logging for the hook binaries

pub mod logging;
pub mod pre_commit;
pub mod repo;

pub use pre_commit::{
    exit_code_for, pre_commit_hook, report_failure, repository_root, CommitGate, GateOutcome,
};
pub use repo::{
    open_query, CommandQuery, LibGitQuery, MemoryQuery, QueryKind, RepositoryQuery, StagedBlob,
    INDEX_FILE_ENV,
};
