// Rust guideline compliant 2026-02-06

//! Human-readable rendering of check results.

use stagecheck_core::FileReport;

/// Renders the diagnostics for one file.
///
/// Clean files render as a single `ok` line.
pub fn render_file_report(report: &FileReport) -> String {
    if report.is_clean() {
        return format!("{}: ok\n", report.path);
    }

    let mut out = String::new();
    if let Some(line) = report.header_mismatch {
        out.push_str(&format!(
            "{}: header differs from the required header at line {}\n",
            report.path, line
        ));
    }
    if report.bad_imports() {
        out.push_str(&format!("{}: imports are not in canonical order\n", report.path));
        for line in &report.ordering.misplaced {
            out.push_str(&format!("  misplaced: {}\n", line));
        }
        out.push_str("  expected:\n");
        for line in &report.ordering.expected {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    out
}

/// Renders the closing summary line.
pub fn render_summary(reports: &[FileReport]) -> String {
    let failing = reports.iter().filter(|report| !report.is_clean()).count();
    if failing == 0 {
        format!("All {} file(s) pass.\n", reports.len())
    } else {
        format!("{} of {} file(s) have issues.\n", failing, reports.len())
    }
}
