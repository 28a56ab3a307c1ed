// Rust guideline compliant 2026-02-06

//! Implementation of the `stagecheck pre-commit` command.

use anyhow::Result;
use stagecheck_core::Config;
use stagecheck_hooks::{open_query, repository_root, CommitGate};
use std::path::Path;

/// Runs the commit gate in the repository containing `repo_path`.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `json` - Print the full scan outcome as JSON instead of remediation commands
///
/// # Returns
///
/// The exit code: 0 when the commit may proceed, 1 on violations.
///
/// # Errors
///
/// Returns an error on infrastructure failure.
pub fn execute(repo_path: &Path, json: bool) -> Result<i32> {
    if !json {
        return stagecheck_hooks::pre_commit_hook(repo_path);
    }

    let root = repository_root(repo_path)?;
    let config = Config::load(&root)?;
    let query = open_query(&root, config.backend)?;
    let gate = CommitGate::new(query.as_ref(), &config.import_groups, &config, &root);
    let outcome = gate.scan()?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(outcome.exit_code())
}
