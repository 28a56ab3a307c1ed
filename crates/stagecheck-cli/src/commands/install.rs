// Rust guideline compliant 2026-02-06

//! Implementation of the `stagecheck install` command.
//!
//! Writes a pre-commit hook into the repository's hooks directory.

use anyhow::Result;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Command the installed hook runs.
pub const HOOK_COMMAND: &str = "stagecheck pre-commit";

/// Installs the pre-commit hook for the repository containing `repo_path`.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `force` - Overwrite an existing pre-commit hook
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - A hook already exists and `force` is false
/// - The hook file cannot be written
pub fn execute(repo_path: &Path, force: bool) -> Result<PathBuf> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    let hooks_dir = repo.path().join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !force {
        anyhow::bail!(
            "A pre-commit hook already exists at {}. Use --force to overwrite.",
            hook_path.display()
        );
    }

    install_hook(&hook_path, HOOK_COMMAND)?;
    tracing::info!(path = %hook_path.display(), "installed pre-commit hook");
    println!("✓ Installed pre-commit hook at {}", hook_path.display());
    Ok(hook_path)
}

fn install_hook(path: &Path, command: &str) -> Result<()> {
    let hook_content = format!("#!/bin/sh\nexec {}\n", command);
    fs::write(path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
