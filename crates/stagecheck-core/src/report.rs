// Rust guideline compliant 2026-02-06

//! Violation aggregation and remediation output.

use crate::{OrderingCheck, OrderingReport, RequiredHeader, StagedFile};
use serde::Serialize;

/// Outcome of both checks for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Repository-relative path.
    pub path: String,
    /// First header line that differs, 1-based, when the header does not match.
    pub header_mismatch: Option<usize>,
    /// Import ordering result.
    pub ordering: OrderingReport,
}

impl FileReport {
    /// Returns whether the header check failed.
    pub fn bad_header(&self) -> bool {
        self.header_mismatch.is_some()
    }

    /// Returns whether the import check failed.
    pub fn bad_imports(&self) -> bool {
        !self.ordering.valid
    }

    /// Returns whether both checks passed.
    pub fn is_clean(&self) -> bool {
        !self.bad_header() && !self.bad_imports()
    }
}

/// Runs the header and import checks against one file.
pub fn check_file(
    file: &StagedFile,
    header: &RequiredHeader,
    ordering: &dyn OrderingCheck,
) -> FileReport {
    let header_mismatch = if header.matches(&file.blob_content) {
        None
    } else {
        header.first_mismatch(&file.blob_content)
    };
    FileReport {
        path: file.path.clone(),
        header_mismatch,
        ordering: ordering.find_ordering(&file.blob_content),
    }
}

/// Paths that failed the header or import checks, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSet {
    bad_headers: Vec<String>,
    bad_imports: Vec<String>,
}

fn insert_ordered(set: &mut Vec<String>, path: &str) {
    if !set.iter().any(|existing| existing == path) {
        set.push(path.to_string());
    }
}

impl ViolationSet {
    /// Creates an empty violation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a header violation.
    pub fn add_bad_header(&mut self, path: &str) {
        insert_ordered(&mut self.bad_headers, path);
    }

    /// Records an import ordering violation.
    pub fn add_bad_imports(&mut self, path: &str) {
        insert_ordered(&mut self.bad_imports, path);
    }

    /// Records whatever violations `report` carries.
    pub fn record(&mut self, report: &FileReport) {
        if report.bad_imports() {
            self.add_bad_imports(&report.path);
        }
        if report.bad_header() {
            self.add_bad_header(&report.path);
        }
    }

    /// Paths with a header violation.
    pub fn bad_headers(&self) -> &[String] {
        &self.bad_headers
    }

    /// Paths with an import ordering violation.
    pub fn bad_imports(&self) -> &[String] {
        &self.bad_imports
    }

    /// Returns whether no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.bad_headers.is_empty() && self.bad_imports.is_empty()
    }

    /// Returns the union of both sets, deduplicated, headers first.
    pub fn union(&self) -> Vec<String> {
        let mut all = Vec::with_capacity(self.bad_headers.len() + self.bad_imports.len());
        for path in self.bad_headers.iter().chain(&self.bad_imports) {
            insert_ordered(&mut all, path);
        }
        all
    }
}

/// Commands suggested to repair violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remediation {
    /// Command that rewrites headers, including the header path argument.
    pub reheader: String,
    /// Command that reorders imports.
    pub import_action: String,
}

impl Default for Remediation {
    fn default() -> Self {
        Self {
            reheader: "reheader lib/SOURCE_HEADER".to_string(),
            import_action: "import_action".to_string(),
        }
    }
}

impl Remediation {
    /// Renders the remediation message for `violations`.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn render(&self, violations: &ViolationSet) -> Option<String> {
        if violations.is_empty() {
            return None;
        }

        let mut out = String::from(
            "Header/import issues found. To commit, run the following commands:\n",
        );
        if !violations.bad_headers().is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                self.reheader,
                violations.bad_headers().join(" ")
            ));
        }
        if !violations.bad_imports().is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                self.import_action,
                violations.bad_imports().join(" ")
            ));
        }
        out.push_str(&format!("git add {}\n", violations.union().join(" ")));
        Some(out)
    }
}
