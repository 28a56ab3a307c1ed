// Rust guideline compliant 2026-02-06

//! Diagnostic logging setup shared by the hook binaries.
//!
//! Logs go to stderr so stdout carries only the remediation commands.

use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable consulted when no level is given explicitly.
pub const LOG_ENV: &str = "STAGECHECK_LOG";

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Unknown log level '{}'", other),
    }
}

/// Installs the global stderr subscriber.
///
/// `level` wins over `STAGECHECK_LOG`; the default is `warn`. Returns
/// `false` when another subscriber was already installed, in which case
/// that subscriber keeps its own level.
///
/// # Errors
///
/// Returns an error if the level name is invalid.
pub fn init_tracing(level: Option<&str>) -> anyhow::Result<bool> {
    let from_env = std::env::var(LOG_ENV).ok();
    let level = match level.or(from_env.as_deref()) {
        Some(name) => parse_log_level(name)?,
        None => Level::WARN,
    };

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::warn!(error = %err, requested = %level, "tracing subscriber already installed");
        return Ok(false);
    }
    Ok(true)
}
