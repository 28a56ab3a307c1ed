// Rust guideline compliant 2026-02-06

//! Read-only queries against the repository index.
//!
//! The commit gate only needs three operations, each mirroring a git command:
//! listing staged paths, listing index entries for those paths, and reading
//! a blob. Failures carry the equivalent command line and an exit code.

mod command;
mod libgit;
mod memory;

pub use command::CommandQuery;
pub use libgit::{LibGitQuery, INDEX_FILE_ENV};
pub use memory::{MemoryQuery, QueryKind};

use serde::Serialize;
use stagecheck_core::{Backend, Result};
use std::path::Path;

/// One index entry, as listed by `git ls-files --stage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedBlob {
    /// File mode in octal, e.g. `100644`.
    pub mode: String,
    /// Blob id as a hex string.
    pub id: String,
    /// Merge stage, 0 outside of conflicts.
    pub stage: u8,
    /// Repository-relative path.
    pub path: String,
}

impl StagedBlob {
    /// Parses one `<mode> <sha> <stage>\t<path>` listing line.
    ///
    /// Returns `None` for blank or malformed lines.
    pub fn parse(listing: &str) -> Option<Self> {
        if listing.trim().is_empty() {
            return None;
        }
        let (meta, path) = listing.split_once('\t')?;
        let mut fields = meta.split(' ');
        let mode = fields.next()?;
        let id = fields.next()?;
        let stage = fields.next()?.parse().ok()?;
        Some(Self {
            mode: mode.to_string(),
            id: id.to_string(),
            stage,
            path: path.to_string(),
        })
    }
}

/// Read-only access to staged content.
pub trait RepositoryQuery {
    /// Lists paths staged for commit, including deletions.
    fn staged_paths(&self) -> Result<Vec<String>>;

    /// Lists index entries for `paths`, in index order.
    ///
    /// Paths without an index entry (staged deletions) are omitted.
    fn staged_blobs(&self, paths: &[String]) -> Result<Vec<StagedBlob>>;

    /// Reads a blob and splits it into lines.
    fn blob_lines(&self, id: &str) -> Result<Vec<String>>;
}

pub(crate) fn staged_paths_command() -> String {
    "git diff --cached --name-only".to_string()
}

pub(crate) fn staged_blobs_command(paths: &[String]) -> String {
    format!("git ls-files --stage {}", paths.join(" "))
}

pub(crate) fn blob_command(id: &str) -> String {
    format!("git show {}", id)
}

/// Opens the query backend selected by configuration.
///
/// # Arguments
///
/// * `repo_root` - Working tree root of the repository
/// * `backend` - Which implementation to use
///
/// # Errors
///
/// Returns an error if the repository cannot be opened.
pub fn open_query(repo_root: &Path, backend: Backend) -> Result<Box<dyn RepositoryQuery>> {
    Ok(match backend {
        Backend::Libgit2 => Box::new(LibGitQuery::discover(repo_root)?),
        Backend::Command => Box::new(CommandQuery::new(repo_root)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        let blob = StagedBlob::parse(
            "100644 3b18e512dba79e4c8300dd08aeb37f8e728b8dad 0\tsrc/main/java/Foo Bar.java",
        )
        .unwrap();
        assert_eq!(blob.mode, "100644");
        assert_eq!(blob.id, "3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
        assert_eq!(blob.stage, 0);
        assert_eq!(blob.path, "src/main/java/Foo Bar.java");
    }

    #[test]
    fn test_parse_blank_and_malformed() {
        assert_eq!(StagedBlob::parse(""), None);
        assert_eq!(StagedBlob::parse("   "), None);
        assert_eq!(StagedBlob::parse("100644 abc"), None);
        assert_eq!(StagedBlob::parse("100644 abc x\tFoo.java"), None);
    }

    #[test]
    fn test_command_rendering() {
        let paths = vec!["a.as".to_string(), "B.java".to_string()];
        assert_eq!(staged_blobs_command(&paths), "git ls-files --stage a.as B.java");
        assert_eq!(blob_command("abc"), "git show abc");
    }
}
