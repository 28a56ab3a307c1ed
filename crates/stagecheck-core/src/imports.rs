// Rust guideline compliant 2026-02-06

//! Canonical import ordering.
//!
//! Imports are grouped by package prefix, groups appear in configured order
//! separated by one blank line, and each group is sorted by line text.
//! `import static` lines always form the last group.

use serde::{Deserialize, Serialize};

/// Group entry that collects imports matching no other prefix.
pub const WILDCARD_GROUP: &str = "*";

/// Result of an ordering check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingReport {
    /// Whether the import block is already canonical.
    pub valid: bool,
    /// Lines of the import block that are not where the canonical order puts them.
    pub misplaced: Vec<String>,
    /// The canonical import block, blank lines included.
    pub expected: Vec<String>,
}

/// A capability that decides whether file content has canonically ordered imports.
pub trait OrderingCheck {
    /// Checks the imports in `lines`.
    fn find_ordering(&self, lines: &[String]) -> OrderingReport;
}

/// Ordered list of package prefixes defining the import groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportGroups {
    prefixes: Vec<String>,
}

impl Default for ImportGroups {
    fn default() -> Self {
        Self::new(
            [
                "java",
                "javax",
                "flash",
                "mx",
                WILDCARD_GROUP,
                "com.samskivert",
                "com.samskivert.swing",
                "com.samskivert.servlet",
                "com.samskivert.jdbc",
                "com.samskivert.depot",
                "com.threerings.io",
                "com.threerings.util",
                "com.threerings.presents",
                "com.threerings.crowd",
                "com.threerings.parlor",
                "com.threerings.whirled",
                "com.threerings",
            ]
            .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        )
    }
}

struct Import<'a> {
    line: &'a str,
    is_static: bool,
    path: &'a str,
}

fn parse_import(line: &str) -> Option<Import<'_>> {
    let rest = line.strip_prefix("import ")?;
    let rest = rest.trim_start();
    let (is_static, rest) = match rest.strip_prefix("static ") {
        Some(after) => (true, after.trim_start()),
        None => (false, rest),
    };
    let end = rest
        .find(|c: char| c == ';' || c.is_whitespace())
        .unwrap_or(rest.len());
    Some(Import {
        line,
        is_static,
        path: &rest[..end],
    })
}

fn prefix_matches(path: &str, prefix: &str) -> bool {
    path == prefix
        || (path.len() > prefix.len()
            && path.starts_with(prefix)
            && path.as_bytes()[prefix.len()] == b'.')
}

impl ImportGroups {
    /// Creates groups from an ordered list of prefixes.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Returns the configured prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Returns the ordinal of the group `import` belongs to.
    ///
    /// Configured groups use their index, unmatched imports fall into the
    /// wildcard group (or after all groups when there is none) and static
    /// imports come last.
    fn rank(&self, import: &Import<'_>) -> usize {
        if import.is_static {
            return self.prefixes.len() + 1;
        }
        self.prefixes
            .iter()
            .enumerate()
            .filter(|(_, prefix)| prefix.as_str() != WILDCARD_GROUP)
            .filter(|(_, prefix)| prefix_matches(import.path, prefix))
            .max_by_key(|(_, prefix)| prefix.len())
            .map(|(idx, _)| idx)
            .or_else(|| self.prefixes.iter().position(|p| p == WILDCARD_GROUP))
            .unwrap_or(self.prefixes.len())
    }

    /// Builds the canonical block for a set of import lines.
    fn canonical(&self, imports: &[Import<'_>]) -> Vec<String> {
        let mut ranked: Vec<(usize, &str)> = imports
            .iter()
            .map(|import| (self.rank(import), import.line))
            .collect();
        ranked.sort();

        let mut expected = Vec::with_capacity(ranked.len() * 2);
        let mut current = None;
        for (rank, line) in ranked {
            if current.is_some() && current != Some(rank) {
                expected.push(String::new());
            }
            current = Some(rank);
            expected.push(line.to_string());
        }
        expected
    }
}

impl OrderingCheck for ImportGroups {
    fn find_ordering(&self, lines: &[String]) -> OrderingReport {
        let trimmed: Vec<&str> = lines.iter().map(|line| line.trim()).collect();
        let is_import = |line: &&str| parse_import(line).is_some();

        let Some(first) = trimmed.iter().position(|line| is_import(line)) else {
            return OrderingReport {
                valid: true,
                ..OrderingReport::default()
            };
        };
        let last = trimmed.iter().rposition(|line| is_import(line)).unwrap_or(first);
        let block = &trimmed[first..=last];

        let imports: Vec<Import<'_>> = block.iter().filter_map(|line| parse_import(line)).collect();
        let expected = self.canonical(&imports);

        let misplaced: Vec<String> = block
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .filter(|(idx, line)| expected.get(*idx).map(String::as_str) != Some(**line))
            .map(|(_, line)| line.to_string())
            .collect();

        OrderingReport {
            valid: misplaced.is_empty() && block.len() == expected.len(),
            misplaced,
            expected,
        }
    }
}

/// Checks `lines` against the default import groups.
pub fn find_ordering(lines: &[String]) -> OrderingReport {
    ImportGroups::default().find_ordering(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split_lines;

    fn check(text: &str) -> OrderingReport {
        find_ordering(&split_lines(text))
    }

    #[test]
    fn test_no_imports_is_valid() {
        let report = check("package a;\n\npublic class A {}\n");
        assert!(report.valid);
        assert!(report.expected.is_empty());
    }

    #[test]
    fn test_library_subpackages_form_their_own_groups() {
        let report = check(
            "import com.samskivert.util.Invoker;\n\
             \n\
             import com.samskivert.servlet.SiteIdentifier;\n\
             \n\
             import com.samskivert.depot.PersistenceContext;\n\
             \n\
             import com.threerings.presents.data.ClientObject;\n\
             \n\
             import com.threerings.sling.server.UserLogic.Caller;\n\
             import com.threerings.sling.server.UserLogic;\n",
        );
        assert!(report.valid, "misplaced: {:?}", report.misplaced);
    }

    #[test]
    fn test_library_subpackage_merged_into_parent_group() {
        let report = check(
            "import com.samskivert.servlet.SiteIdentifier;\n\
             import com.samskivert.util.Invoker;\n",
        );
        assert!(!report.valid);
        assert_eq!(
            report.expected,
            vec![
                "import com.samskivert.util.Invoker;",
                "",
                "import com.samskivert.servlet.SiteIdentifier;",
            ]
        );
    }

    #[test]
    fn test_unsorted_group() {
        let report = check("import java.util.Map;\nimport java.util.List;\n");
        assert!(!report.valid);
        assert_eq!(
            report.expected,
            vec!["import java.util.List;", "import java.util.Map;"]
        );
        assert_eq!(report.misplaced.len(), 2);
    }

    #[test]
    fn test_groups_out_of_order() {
        let report = check("import com.google.inject.Inject;\n\nimport java.util.List;\n");
        assert!(!report.valid);
        assert_eq!(report.expected[0], "import java.util.List;");
    }

    #[test]
    fn test_missing_blank_line_between_groups() {
        let report = check("import java.util.List;\nimport javax.swing.JFrame;\n");
        assert!(!report.valid);
        assert_eq!(report.misplaced, vec!["import javax.swing.JFrame;"]);
    }

    #[test]
    fn test_doubled_blank_line_between_groups() {
        let report = check("import java.util.List;\n\n\nimport javax.swing.JFrame;\n");
        assert!(!report.valid);
    }

    #[test]
    fn test_static_import_must_be_last() {
        let report = check(
            "import static com.threerings.sling.Log.log;\n\nimport java.util.List;\n",
        );
        assert!(!report.valid);
        assert_eq!(report.expected.last().unwrap(), "import static com.threerings.sling.Log.log;");
    }

    #[test]
    fn test_code_inside_import_block() {
        let report = check("import java.util.List;\n// note\nimport java.util.Map;\n");
        assert!(!report.valid);
        assert!(report.misplaced.contains(&"// note".to_string()));
    }

    #[test]
    fn test_prefix_matches_whole_segments() {
        assert!(prefix_matches("java.util.Map", "java"));
        assert!(!prefix_matches("javax.swing.JFrame", "java"));
        assert!(prefix_matches("com.samskivert", "com.samskivert"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let groups = ImportGroups::new(vec![
            "com.threerings".to_string(),
            WILDCARD_GROUP.to_string(),
            "com.threerings.util".to_string(),
        ]);
        let report = groups.find_ordering(&split_lines(
            "import com.threerings.sling.Foo;\n\nimport org.junit.Test;\n\nimport com.threerings.util.OOOConfig;\n",
        ));
        assert!(report.valid, "misplaced: {:?}", report.misplaced);
    }

    #[test]
    fn test_actionscript_indented_imports() {
        let report = check(
            "package com.threerings.foo {\n\
             \n\
             import flash.display.Sprite;\n\
             import flash.events.Event;\n\
             \n\
             import com.threerings.util.Log;\n\
             \n\
             public class Foo extends Sprite {}\n\
             }\n",
        );
        assert!(report.valid, "misplaced: {:?}", report.misplaced);
    }
}
