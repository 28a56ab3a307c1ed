// Rust guideline compliant 2026-02-06

//! Stagecheck CLI Application
//!
//! Command-line interface for the Stagecheck pre-commit gate.

use clap::Parser;
use stagecheck_cli::commands;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "stagecheck",
    version,
    about = "Stagecheck: header and import checks for staged source files",
    long_about = "Stagecheck blocks commits whose staged source files lack the required header or have imports out of canonical order, and prints the commands that fix them.",
    after_help = "Examples:\n  stagecheck install\n  stagecheck pre-commit\n  stagecheck check src/main/java/Foo.java\n  stagecheck config\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Log level for diagnostics on stderr (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Check staged files (run by the Git pre-commit hook)
    PreCommit,

    /// Install the Git pre-commit hook
    Install {
        /// Overwrite an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },

    /// Check working-tree files
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    stagecheck_hooks::logging::init_tracing(cli.log_level.as_deref())?;
    let repo_path = std::env::current_dir()?;

    match cli.command {
        Some(Commands::PreCommit) => commands::pre_commit::execute(&repo_path, cli.json),
        Some(Commands::Install { force }) => {
            commands::install::execute(&repo_path, force)?;
            Ok(0)
        }
        Some(Commands::Check { files }) => commands::check::execute(&repo_path, &files, cli.json),
        Some(Commands::Config) => {
            commands::config::execute(&repo_path)?;
            Ok(0)
        }
        None => {
            println!("Use --help for usage information");
            Ok(0)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            // Nothing left to report to if the streams are gone.
            let _ = stagecheck_hooks::report_failure(
                &err,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            );
            stagecheck_hooks::exit_code_for(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
