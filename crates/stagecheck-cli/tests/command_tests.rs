// Rust guideline compliant 2026-02-06

//! Integration tests for CLI commands.

use git2::Repository;
use stagecheck_cli::commands;
use stagecheck_core::{Config, RequiredHeader};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "//\n// Sling - Copyright 2012 Three Rings Design, Inc.\n\n";

/// Creates a repository with the default header file.
fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Repository::init(temp_dir.path()).expect("Failed to init git repo");
    fs::create_dir(temp_dir.path().join("lib")).expect("Failed to create lib");
    fs::write(temp_dir.path().join("lib/SOURCE_HEADER"), HEADER).expect("Failed to write header");
    temp_dir
}

fn write(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

#[test]
fn test_install_writes_executable_hook() {
    let temp_dir = setup_repo();
    let hook = commands::install::execute(temp_dir.path(), false).expect("Install failed");

    assert!(hook.ends_with(".git/hooks/pre-commit"));
    let content = fs::read_to_string(&hook).expect("Failed to read hook");
    assert_eq!(content, "#!/bin/sh\nexec stagecheck pre-commit\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook).expect("Failed to stat hook").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

#[test]
fn test_install_refuses_to_overwrite_without_force() {
    let temp_dir = setup_repo();
    let hooks_dir = temp_dir.path().join(".git/hooks");
    fs::create_dir_all(&hooks_dir).expect("Failed to create hooks dir");
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\nexit 0\n").expect("Failed to write hook");

    let err = commands::install::execute(temp_dir.path(), false).expect_err("Install should fail");
    assert!(err.to_string().contains("--force"));

    commands::install::execute(temp_dir.path(), true).expect("Forced install failed");
    let content = fs::read_to_string(hooks_dir.join("pre-commit")).expect("Failed to read hook");
    assert!(content.contains("stagecheck pre-commit"));
}

#[test]
fn test_install_outside_repository_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let err = commands::install::execute(temp_dir.path(), false).expect_err("Install should fail");
    assert!(err.to_string().contains("Not a git repository"));
}

#[test]
fn test_check_paths_reports_each_file() {
    let temp_dir = setup_repo();
    let good = write(
        temp_dir.path(),
        "Good.java",
        &format!("{}package a;\n\nimport java.util.List;\n", HEADER),
    );
    let bad = write(
        temp_dir.path(),
        "Bad.java",
        "package a;\n\nimport com.google.inject.Inject;\nimport java.util.List;\n",
    );

    let header = RequiredHeader::parse(HEADER);
    let reports = commands::check::check_paths(&[good, bad], &header, &Config::default())
        .expect("Check failed");

    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_clean());
    assert_eq!(reports[1].header_mismatch, Some(1));
    assert!(reports[1].bad_imports());
    assert_eq!(
        reports[1].ordering.expected,
        vec!["import java.util.List;", "", "import com.google.inject.Inject;"]
    );
}

#[test]
fn test_check_exit_codes() {
    let temp_dir = setup_repo();
    let good = write(temp_dir.path(), "Good.as", &format!("{}package {{\n}}\n", HEADER));
    let bad = write(temp_dir.path(), "Bad.as", "package {\n}\n");

    assert_eq!(
        commands::check::execute(temp_dir.path(), &[good.clone()], false).expect("Check failed"),
        0
    );
    assert_eq!(
        commands::check::execute(temp_dir.path(), &[good, bad], true).expect("Check failed"),
        1
    );
}

#[test]
fn test_check_missing_file_is_error() {
    let temp_dir = setup_repo();
    let missing = temp_dir.path().join("Missing.java");
    let err = commands::check::execute(temp_dir.path(), &[missing], false)
        .expect_err("Check should fail");
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_pre_commit_json_on_empty_index() {
    let temp_dir = setup_repo();
    let code = commands::pre_commit::execute(temp_dir.path(), true).expect("Pre-commit failed");
    assert_eq!(code, 0);
}

#[test]
fn test_config_command_in_repository() {
    let temp_dir = setup_repo();
    commands::config::execute(temp_dir.path()).expect("Config failed");
}
