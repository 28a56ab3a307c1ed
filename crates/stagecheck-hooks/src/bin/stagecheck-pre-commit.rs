// Rust guideline compliant 2026-02-06

//! Git pre-commit hook entry point.
//!
//! Install with `ln -s $(which stagecheck-pre-commit) .git/hooks/pre-commit`
//! or `stagecheck install`.

use std::process::ExitCode;

fn run() -> anyhow::Result<i32> {
    stagecheck_hooks::logging::init_tracing(None)?;
    let repo_path = std::env::current_dir()?;
    stagecheck_hooks::pre_commit_hook(&repo_path)
}

fn main() -> ExitCode {
    let code = match run() {
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
