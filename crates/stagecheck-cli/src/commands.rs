// Rust guideline compliant 2026-02-06

//! Command implementations for the Stagecheck CLI.

pub mod check;
pub mod config;
pub mod install;
pub mod pre_commit;
