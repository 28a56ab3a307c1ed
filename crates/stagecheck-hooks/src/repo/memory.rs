// Rust guideline compliant 2026-02-06

//! In-memory index for exercising the commit gate without git.

use super::{blob_command, staged_blobs_command, staged_paths_command, RepositoryQuery, StagedBlob};
use stagecheck_core::{split_lines, Error, Result};
use std::cell::Cell;

/// Which query a [`MemoryQuery`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// `staged_paths`
    StagedPaths,
    /// `staged_blobs`
    StagedBlobs,
    /// `blob_lines`
    Blob,
}

struct Entry {
    path: String,
    content: Option<String>,
}

/// A fake repository holding staged files in memory.
#[derive(Default)]
pub struct MemoryQuery {
    entries: Vec<Entry>,
    failure: Option<(QueryKind, i32)>,
    blob_reads: Cell<usize>,
}

impl MemoryQuery {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `path` with `content`.
    pub fn stage(mut self, path: &str, content: &str) -> Self {
        self.entries.push(Entry {
            path: path.to_string(),
            content: Some(content.to_string()),
        });
        self
    }

    /// Stages the deletion of `path`.
    pub fn stage_deletion(mut self, path: &str) -> Self {
        self.entries.push(Entry {
            path: path.to_string(),
            content: None,
        });
        self
    }

    /// Makes the given query fail with `code`.
    pub fn fail(mut self, kind: QueryKind, code: i32) -> Self {
        self.failure = Some((kind, code));
        self
    }

    /// Number of blobs read so far.
    pub fn blob_reads(&self) -> usize {
        self.blob_reads.get()
    }

    fn check(&self, kind: QueryKind, command: String) -> Result<()> {
        match self.failure {
            Some((failing, code)) if failing == kind => Err(Error::QueryFailed { command, code }),
            _ => Ok(()),
        }
    }

    fn blob_id(idx: usize) -> String {
        format!("{:040x}", idx + 1)
    }
}

impl RepositoryQuery for MemoryQuery {
    fn staged_paths(&self) -> Result<Vec<String>> {
        self.check(QueryKind::StagedPaths, staged_paths_command())?;
        Ok(self.entries.iter().map(|entry| entry.path.clone()).collect())
    }

    fn staged_blobs(&self, paths: &[String]) -> Result<Vec<StagedBlob>> {
        self.check(QueryKind::StagedBlobs, staged_blobs_command(paths))?;
        Ok(self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.content.is_some() && paths.contains(&entry.path))
            .map(|(idx, entry)| StagedBlob {
                mode: "100644".to_string(),
                id: Self::blob_id(idx),
                stage: 0,
                path: entry.path.clone(),
            })
            .collect())
    }

    fn blob_lines(&self, id: &str) -> Result<Vec<String>> {
        self.check(QueryKind::Blob, blob_command(id))?;
        self.blob_reads.set(self.blob_reads.get() + 1);
        let content = self
            .entries
            .iter()
            .enumerate()
            .find(|(idx, _)| Self::blob_id(*idx) == id)
            .and_then(|(_, entry)| entry.content.as_deref())
            .ok_or_else(|| Error::QueryFailed {
                command: blob_command(id),
                code: 128,
            })?;
        Ok(split_lines(content))
    }
}
