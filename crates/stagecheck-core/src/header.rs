// Rust guideline compliant 2026-02-06

//! Required header block matching.

use crate::{split_lines, Error, Result};
use std::path::Path;

/// The header block every checked source file must start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredHeader {
    lines: Vec<String>,
}

impl RequiredHeader {
    /// Creates a header from already split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Creates a header from raw text.
    pub fn parse(text: &str) -> Self {
        Self::new(split_lines(text))
    }

    /// Loads the header from a file in the working tree.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the header file
    ///
    /// # Errors
    ///
    /// Returns `Error::HeaderMissing` if the file does not exist and
    /// `Error::Io` if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::HeaderMissing(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Returns the header lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of header lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the header is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns whether `content` starts with exactly the header lines.
    ///
    /// Content shorter than the header never matches.
    pub fn matches(&self, content: &[String]) -> bool {
        content.len() >= self.lines.len() && content[..self.lines.len()] == self.lines[..]
    }

    /// Returns the 1-based number of the first line that differs, if any.
    pub fn first_mismatch(&self, content: &[String]) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .find(|(idx, line)| content.get(*idx) != Some(*line))
            .map(|(idx, _)| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(text: &str) -> Vec<String> {
        split_lines(text)
    }

    #[test]
    fn test_matches_exact_prefix() {
        let header = RequiredHeader::parse("//\n// Sling - Copyright 2012\n\n");
        let content = lines("//\n// Sling - Copyright 2012\n\npackage com.example;\n");
        assert!(header.matches(&content));
        assert_eq!(header.first_mismatch(&content), None);
    }

    #[test]
    fn test_single_character_difference() {
        let header = RequiredHeader::parse("//\n// Sling - Copyright 2012\n");
        let content = lines("//\n// Sling - Copyright 2013\npackage a;\n");
        assert!(!header.matches(&content));
        assert_eq!(header.first_mismatch(&content), Some(2));
    }

    #[test]
    fn test_short_content_never_matches() {
        let header = RequiredHeader::parse("a\nb\nc\n");
        let content = lines("a\nb\n");
        assert!(!header.matches(&content));
        assert_eq!(header.first_mismatch(&content), Some(3));
    }

    #[test]
    fn test_crlf_content_does_not_match_lf_header() {
        let header = RequiredHeader::parse("a\nb\n");
        let content = lines("a\r\nb\r\n");
        assert!(!header.matches(&content));
    }

    #[test]
    fn test_empty_header_matches_anything() {
        let header = RequiredHeader::parse("");
        assert!(header.is_empty());
        assert!(header.matches(&[]));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = RequiredHeader::load(&temp_dir.path().join("lib/SOURCE_HEADER"));
        assert!(matches!(result, Err(Error::HeaderMissing(_))));
    }

    #[test]
    fn test_load_without_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("SOURCE_HEADER");
        std::fs::write(&path, "//\n// Header").unwrap();
        let header = RequiredHeader::load(&path).unwrap();
        assert_eq!(header.len(), 2);
        assert!(header.matches(&lines("//\n// Header\nimport a.B;\n")));
    }
}
