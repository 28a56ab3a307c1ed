// Rust guideline compliant 2026-02-06

//! Index queries through libgit2.

use super::{blob_command, staged_blobs_command, staged_paths_command, RepositoryQuery, StagedBlob};
use git2::{ErrorCode, Index, Oid, Repository, Tree};
use stagecheck_core::{split_lines, Error, Result};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Variable git sets when a commit is built from a temporary index,
/// as with `git commit -a` or `git commit <paths>`.
pub const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// Exit code git itself uses for fatal errors.
const GIT_FATAL_EXIT_CODE: i32 = 128;

/// Stage bits of an index entry's flags.
const INDEX_STAGE_MASK: u16 = 0x3000;
const INDEX_STAGE_SHIFT: u16 = 12;

/// Repository queries served in-process by libgit2.
pub struct LibGitQuery {
    repo: Repository,
    index_file: Option<PathBuf>,
}

fn query_failed(command: String) -> impl FnOnce(git2::Error) -> Error {
    move |err| {
        tracing::error!(%command, error = %err, "libgit2 query failed");
        Error::QueryFailed {
            command,
            code: GIT_FATAL_EXIT_CODE,
        }
    }
}

impl LibGitQuery {
    /// Opens the repository containing `path`.
    ///
    /// Honors `GIT_INDEX_FILE`, so the hook reads the index git is about
    /// to commit rather than `.git/index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Git` if no repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        Self::discover_with(path, std::env::var_os(INDEX_FILE_ENV))
    }

    /// Opens the repository containing `path`, reading the index from
    /// `index_file` when given. A relative `index_file` is resolved against `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Git` if no repository is found.
    pub fn discover_with(path: &Path, index_file: Option<OsString>) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| Error::Git(format!("Not a git repository: {}", e.message())))?;
        let query = Self::from_repository(repo);
        Ok(match index_file {
            Some(file) if !file.is_empty() => query.with_index_file(path.join(file)),
            _ => query,
        })
    }

    /// Wraps an already opened repository.
    pub fn from_repository(repo: Repository) -> Self {
        Self {
            repo,
            index_file: None,
        }
    }

    /// Reads staged content from `index_file` instead of the repository index.
    pub fn with_index_file(mut self, index_file: PathBuf) -> Self {
        tracing::debug!(index = %index_file.display(), "using alternate index file");
        self.index_file = Some(index_file);
        self
    }

    fn index(&self) -> std::result::Result<Index, git2::Error> {
        match &self.index_file {
            // Index::open silently yields an empty index for a missing file.
            Some(path) if !path.exists() => Err(git2::Error::from_str(&format!(
                "index file {} does not exist",
                path.display()
            ))),
            Some(path) => Index::open(path),
            None => self.repo.index(),
        }
    }

    /// Returns the root of the working tree, if the repository has one.
    pub fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }

    fn head_tree(&self) -> std::result::Result<Option<Tree<'_>>, git2::Error> {
        match self.repo.head() {
            Ok(head) => head.peel_to_tree().map(Some),
            Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl RepositoryQuery for LibGitQuery {
    fn staged_paths(&self) -> Result<Vec<String>> {
        let command = staged_paths_command();
        tracing::debug!(%command, "listing staged paths");

        let index = self.index().map_err(query_failed(command.clone()))?;
        let tree = self.head_tree().map_err(query_failed(command.clone()))?;
        let diff = self
            .repo
            .diff_tree_to_index(tree.as_ref(), Some(&index), None)
            .map_err(query_failed(command))?;

        let paths = diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        Ok(paths)
    }

    fn staged_blobs(&self, paths: &[String]) -> Result<Vec<StagedBlob>> {
        let command = staged_blobs_command(paths);
        tracing::debug!(%command, "listing index entries");

        let wanted: HashSet<&str> = paths.iter().map(String::as_str).collect();
        let index = self.index().map_err(query_failed(command))?;

        let blobs = index
            .iter()
            .filter_map(|entry| {
                let path = String::from_utf8_lossy(&entry.path).into_owned();
                if !wanted.contains(path.as_str()) {
                    return None;
                }
                Some(StagedBlob {
                    mode: format!("{:o}", entry.mode),
                    id: entry.id.to_string(),
                    stage: ((entry.flags & INDEX_STAGE_MASK) >> INDEX_STAGE_SHIFT) as u8,
                    path,
                })
            })
            .collect();
        Ok(blobs)
    }

    fn blob_lines(&self, id: &str) -> Result<Vec<String>> {
        let command = blob_command(id);
        tracing::debug!(%command, "reading blob");

        let oid = Oid::from_str(id).map_err(query_failed(command.clone()))?;
        let blob = self.repo.find_blob(oid).map_err(query_failed(command))?;
        Ok(split_lines(&String::from_utf8_lossy(blob.content())))
    }
}
