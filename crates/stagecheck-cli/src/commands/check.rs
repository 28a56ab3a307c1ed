// Rust guideline compliant 2026-02-06

//! Implementation of the `stagecheck check` command.
//!
//! Runs the header and import checks on working-tree files, without
//! touching the index.

use crate::output::{render_file_report, render_summary};
use anyhow::{Context, Result};
use stagecheck_core::{check_file, split_lines, Config, FileReport, RequiredHeader, StagedFile};
use stagecheck_hooks::repository_root;
use std::path::{Path, PathBuf};

/// Checks `files` and prints per-file diagnostics.
///
/// Outside a repository, `repo_path` itself is used as the root for the
/// configuration and header file.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `files` - Files to check, relative to the current directory
/// * `json` - Print reports as JSON
///
/// # Returns
///
/// 0 when every file passes, 1 otherwise.
///
/// # Errors
///
/// Returns an error if the configuration, header or a file cannot be read.
pub fn execute(repo_path: &Path, files: &[PathBuf], json: bool) -> Result<i32> {
    let root = repository_root(repo_path).unwrap_or_else(|_| repo_path.to_path_buf());
    let config = Config::load(&root)?;
    let header = RequiredHeader::load(&root.join(&config.header_path))?;

    let reports = check_paths(files, &header, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", render_file_report(report));
        }
        print!("{}", render_summary(&reports));
    }

    Ok(if reports.iter().all(FileReport::is_clean) { 0 } else { 1 })
}

/// Runs both checks on each file in `files`.
///
/// # Errors
///
/// Returns an error if a file cannot be read.
pub fn check_paths(
    files: &[PathBuf],
    header: &RequiredHeader,
    config: &Config,
) -> Result<Vec<FileReport>> {
    files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file = StagedFile {
                path: path.display().to_string(),
                blob_content: split_lines(&content),
            };
            Ok(check_file(&file, header, &config.import_groups))
        })
        .collect()
}
