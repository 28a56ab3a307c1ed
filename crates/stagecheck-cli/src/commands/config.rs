// Rust guideline compliant 2026-02-06

//! Implementation of the `stagecheck config` command.

use anyhow::Result;
use stagecheck_core::Config;
use stagecheck_hooks::repository_root;
use std::path::Path;

/// Prints the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be loaded.
pub fn execute(repo_path: &Path) -> Result<()> {
    let root = repository_root(repo_path)?;
    let config = Config::load(&root)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
