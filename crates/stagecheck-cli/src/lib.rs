// Rust guideline compliant 2026-02-06

//! Stagecheck CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;

pub use output::{render_file_report, render_summary};
