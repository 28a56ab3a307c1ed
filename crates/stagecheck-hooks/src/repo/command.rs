// Rust guideline compliant 2026-02-06

//! Index queries through `git` subprocesses.

use super::{blob_command, staged_blobs_command, staged_paths_command, RepositoryQuery, StagedBlob};
use stagecheck_core::{split_lines, Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Exit code reported when the `git` binary cannot be spawned.
const SPAWN_FAILED_EXIT_CODE: i32 = 127;

/// Repository queries served by running `git` in the working tree.
pub struct CommandQuery {
    workdir: PathBuf,
}

impl CommandQuery {
    /// Creates a query runner for the working tree at `workdir`.
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }

    /// Runs `git` with `args` and returns its drained stdout.
    fn slurp(&self, args: &[&str], command: String) -> Result<String> {
        tracing::debug!(%command, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| {
                tracing::error!(%command, error = %err, "failed to spawn git");
                Error::QueryFailed {
                    command: command.clone(),
                    code: SPAWN_FAILED_EXIT_CODE,
                }
            })?;

        if !output.status.success() {
            // Killed by a signal leaves no code.
            let code = output.status.code().unwrap_or(1);
            return Err(Error::QueryFailed { command, code });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Splits `-z` output into records.
///
/// NUL-terminated output is never quoted, whatever `core.quotePath` says.
fn split_records(stdout: &str) -> impl Iterator<Item = &str> {
    stdout.split('\0').filter(|record| !record.is_empty())
}

impl RepositoryQuery for CommandQuery {
    fn staged_paths(&self) -> Result<Vec<String>> {
        let stdout = self.slurp(
            &["diff", "--cached", "--name-only", "-z"],
            staged_paths_command(),
        )?;
        Ok(split_records(&stdout).map(str::to_string).collect())
    }

    fn staged_blobs(&self, paths: &[String]) -> Result<Vec<StagedBlob>> {
        let mut args = vec!["--literal-pathspecs", "ls-files", "--stage", "-z", "--"];
        args.extend(paths.iter().map(String::as_str));
        let stdout = self.slurp(&args, staged_blobs_command(paths))?;
        Ok(split_records(&stdout).filter_map(StagedBlob::parse).collect())
    }

    fn blob_lines(&self, id: &str) -> Result<Vec<String>> {
        let stdout = self.slurp(&["show", id], blob_command(id))?;
        Ok(split_lines(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_records_keeps_unquoted_paths() {
        let records: Vec<&str> = split_records("Caf\u{e9}.java\0dir/a b.as\0").collect();
        assert_eq!(records, vec!["Caf\u{e9}.java", "dir/a b.as"]);
    }

    #[test]
    fn test_split_records_parses_stage_listing() {
        let stdout = "100644 3b18e512dba79e4c8300dd08aeb37f8e728b8dad 0\tCaf\u{e9}.java\0";
        let blobs: Vec<StagedBlob> = split_records(stdout).filter_map(StagedBlob::parse).collect();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].path, "Caf\u{e9}.java");
    }

    #[test]
    fn test_split_records_empty_output() {
        assert_eq!(split_records("").count(), 0);
    }
}
