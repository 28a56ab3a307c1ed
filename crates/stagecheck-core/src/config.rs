// Rust guideline compliant 2026-02-06

//! Configuration management for Stagecheck.

use crate::{Error, ImportGroups, Remediation, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file at the repository root.
pub const CONFIG_FILE: &str = ".stagecheck.toml";

/// How staged content is read from the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// In-process libgit2.
    #[default]
    Libgit2,
    /// `git` subprocesses.
    Command,
}

/// Where the external repair tools live relative to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolLayout {
    /// Tools are found on `PATH`.
    #[default]
    Path,
    /// Repository checked out inside an assemblage: `../assemblage/aspirin/bin`.
    Assemblage,
    /// Repository checked out next to aspirin: `../aspirin/bin`.
    Standalone,
}

impl ToolLayout {
    /// Resolves the tool directory for a repository rooted at `repo_root`.
    ///
    /// Returns `None` for [`ToolLayout::Path`].
    pub fn tool_dir(self, repo_root: &Path) -> Option<PathBuf> {
        let parent = repo_root.parent().unwrap_or(repo_root);
        match self {
            ToolLayout::Path => None,
            ToolLayout::Assemblage => Some(parent.join("assemblage").join("aspirin").join("bin")),
            ToolLayout::Standalone => Some(parent.join("aspirin").join("bin")),
        }
    }
}

/// Configuration for the commit gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name suffixes that are checked.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,

    /// Repository-relative path of the required header file.
    #[serde(default = "default_header_path")]
    pub header_path: String,

    /// Import groups in canonical order.
    #[serde(default)]
    pub import_groups: ImportGroups,

    /// Repository backend.
    #[serde(default)]
    pub backend: Backend,

    /// Location profile for the repair tools.
    #[serde(default)]
    pub tool_layout: ToolLayout,
}

fn default_suffixes() -> Vec<String> {
    vec![".as".to_string(), ".java".to_string()]
}

fn default_header_path() -> String {
    "lib/SOURCE_HEADER".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
            header_path: default_header_path(),
            import_groups: ImportGroups::default(),
            backend: Backend::default(),
            tool_layout: ToolLayout::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.stagecheck.toml`
    /// 3. Environment variables with `STAGECHECK_` prefix
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Path to the repository working tree
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        Self::load_with(repo_root, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(repo_root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported variables:
    /// - `STAGECHECK_SUFFIXES` - Comma separated suffix list
    /// - `STAGECHECK_HEADER_PATH` - Header file path
    /// - `STAGECHECK_BACKEND` - `libgit2` or `command`
    /// - `STAGECHECK_TOOL_LAYOUT` - `path`, `assemblage` or `standalone`
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("STAGECHECK_SUFFIXES") {
            self.suffixes = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("STAGECHECK_HEADER_PATH") {
            self.header_path = val;
        }

        if let Some(val) = lookup("STAGECHECK_BACKEND") {
            self.backend = match val.as_str() {
                "libgit2" => Backend::Libgit2,
                "command" => Backend::Command,
                _ => {
                    return Err(Error::Config(
                        "STAGECHECK_BACKEND must be libgit2 or command".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("STAGECHECK_TOOL_LAYOUT") {
            self.tool_layout = match val.as_str() {
                "path" => ToolLayout::Path,
                "assemblage" => ToolLayout::Assemblage,
                "standalone" => ToolLayout::Standalone,
                _ => {
                    return Err(Error::Config(
                        "STAGECHECK_TOOL_LAYOUT must be path, assemblage, or standalone"
                            .to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No suffix is configured or a suffix does not start with `.`
    /// - The header path is empty
    /// - More than one wildcard import group is configured
    fn validate(&self) -> Result<()> {
        if self.suffixes.is_empty() {
            return Err(Error::Config("suffixes must not be empty".to_string()));
        }
        if let Some(bad) = self.suffixes.iter().find(|s| !s.starts_with('.') || s.len() < 2) {
            return Err(Error::Config(format!(
                "suffix must start with '.', got '{}'",
                bad
            )));
        }
        if self.header_path.trim().is_empty() {
            return Err(Error::Config("header_path must not be empty".to_string()));
        }
        let wildcards = self
            .import_groups
            .prefixes()
            .iter()
            .filter(|p| p.as_str() == crate::imports::WILDCARD_GROUP)
            .count();
        if wildcards > 1 {
            return Err(Error::Config(
                "import_groups may contain at most one '*' group".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns whether `path` has one of the checked suffixes.
    pub fn is_source(&self, path: &str) -> bool {
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }

    /// Builds the remediation commands for a repository rooted at `repo_root`.
    pub fn remediation(&self, repo_root: &Path) -> Remediation {
        let import_action = match self.tool_layout.tool_dir(repo_root) {
            Some(dir) => dir.join("import_action").display().to_string(),
            None => "import_action".to_string(),
        };
        Remediation {
            reheader: format!("reheader {}", self.header_path),
            import_action,
        }
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}
