use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("gitlet").expect("Failed to locate the gitlet binary");
    command.current_dir(dir).args(args);

    command
}

/// Run a command expected to succeed and capture its standard output.
pub fn run_for_stdout(dir: &Path, args: &[&str]) -> String {
    let assert = run_gitlet_command(dir, args).assert().success();

    String::from_utf8(assert.get_output().stdout.clone()).expect("Output is not valid UTF-8")
}

/// Write one file, stage it and commit it in a single step.
pub fn commit_file(dir: &Path, file_name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));
    run_gitlet_command(dir, &["add", file_name]).assert().success();
    run_gitlet_command(dir, &["commit", message])
        .assert()
        .success();
}

/// Commit ids reachable from HEAD along first parents, newest first.
pub fn commit_ids(dir: &Path) -> Vec<String> {
    run_for_stdout(dir, &["log"])
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}
