// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Checks every staged source file for the required header and canonical
//! import ordering, and prints the commands that repair any violation.

use crate::repo::{open_query, LibGitQuery, RepositoryQuery};
use anyhow::Result;
use serde::Serialize;
use stagecheck_core::error::INFRASTRUCTURE_EXIT_CODE;
use stagecheck_core::{
    check_file, Config, Error, FileReport, OrderingCheck, RequiredHeader, StagedFile, ViolationSet,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exit code that blocks a commit with violations.
pub const VIOLATION_EXIT_CODE: i32 = 1;

/// What a scan of the index found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GateOutcome {
    /// Paths that were checked, in index order.
    pub checked: Vec<String>,
    /// Per-file check results.
    pub reports: Vec<FileReport>,
    /// Aggregated violations.
    pub violations: ViolationSet,
}

impl GateOutcome {
    /// Returns the exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.violations.is_empty() {
            0
        } else {
            VIOLATION_EXIT_CODE
        }
    }
}

/// Checks staged content before a commit is recorded.
pub struct CommitGate<'a> {
    query: &'a dyn RepositoryQuery,
    ordering: &'a dyn OrderingCheck,
    config: &'a Config,
    repo_root: &'a Path,
}

impl<'a> CommitGate<'a> {
    /// Creates a gate.
    ///
    /// # Arguments
    ///
    /// * `query` - Source of staged content
    /// * `ordering` - Import ordering check
    /// * `config` - Suffixes, header path and remediation settings
    /// * `repo_root` - Working tree root, used to resolve the header file
    pub fn new(
        query: &'a dyn RepositoryQuery,
        ordering: &'a dyn OrderingCheck,
        config: &'a Config,
        repo_root: &'a Path,
    ) -> Self {
        Self {
            query,
            ordering,
            config,
            repo_root,
        }
    }

    /// Scans the index and returns every violation found.
    ///
    /// The header file is read only when at least one staged path has a
    /// checked suffix. All files are checked even after a violation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A repository query fails
    /// - The header file is missing or unreadable
    pub fn scan(&self) -> stagecheck_core::Result<GateOutcome> {
        let sources: Vec<String> = self
            .query
            .staged_paths()?
            .into_iter()
            .filter(|path| self.config.is_source(path))
            .collect();
        if sources.is_empty() {
            tracing::debug!("no staged source files");
            return Ok(GateOutcome::default());
        }

        let header = RequiredHeader::load(&self.repo_root.join(&self.config.header_path))?;
        let mut outcome = GateOutcome::default();

        for blob in self.query.staged_blobs(&sources)? {
            let file = StagedFile {
                blob_content: self.query.blob_lines(&blob.id)?,
                path: blob.path,
            };
            let report = check_file(&file, &header, self.ordering);
            tracing::info!(
                path = %report.path,
                bad_header = report.bad_header(),
                bad_imports = report.bad_imports(),
                "checked staged file"
            );
            outcome.violations.record(&report);
            outcome.checked.push(file.path);
            outcome.reports.push(report);
        }

        Ok(outcome)
    }

    /// Scans the index and writes remediation commands to `out`.
    ///
    /// # Returns
    ///
    /// 0 when the commit may proceed, [`VIOLATION_EXIT_CODE`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error on infrastructure failure; nothing is written then.
    pub fn run<W: Write>(&self, out: &mut W) -> stagecheck_core::Result<i32> {
        let outcome = self.scan()?;
        let remediation = self.config.remediation(self.repo_root);
        if let Some(message) = remediation.render(&outcome.violations) {
            out.write_all(message.as_bytes())?;
            out.flush()?;
        }
        Ok(outcome.exit_code())
    }
}

/// Returns the working tree root of the repository containing `path`.
///
/// # Errors
///
/// Returns an error if `path` is not inside a non-bare repository.
pub fn repository_root(path: &Path) -> stagecheck_core::Result<PathBuf> {
    LibGitQuery::discover(path)?
        .workdir()
        .ok_or_else(|| Error::Git("Repository has no working tree".to_string()))
}

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
///
/// # Returns
///
/// The process exit code: 0 if the commit may proceed, non-zero otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The repository or configuration cannot be loaded
/// - A repository query fails
/// - The required header file is missing
pub fn pre_commit_hook(repo_path: &Path) -> Result<i32> {
    let root = repository_root(repo_path)?;
    let config = Config::load(&root)?;
    let query = open_query(&root, config.backend)?;
    let gate = CommitGate::new(query.as_ref(), &config.import_groups, &config, &root);

    let mut stdout = std::io::stdout().lock();
    Ok(gate.run(&mut stdout)?)
}

/// Returns the exit code a failed hook run should terminate with.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map(Error::exit_code)
        .unwrap_or(INFRASTRUCTURE_EXIT_CODE)
}

/// Prints a failed hook run the way git users expect to see it.
///
/// Query failures go to `stdout` as `<command> failed, bailing`; everything
/// else goes to `stderr`.
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn report_failure<O: Write, E: Write>(
    err: &anyhow::Error,
    stdout: &mut O,
    stderr: &mut E,
) -> std::io::Result<()> {
    match err.downcast_ref::<Error>() {
        Some(query) if matches!(query, Error::QueryFailed { .. }) => writeln!(stdout, "{}", query),
        _ => writeln!(stderr, "Error: {:#}", err),
    }
}
