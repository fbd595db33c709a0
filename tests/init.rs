use crate::common::command::{
    init_repository_dir, repository_dir, run_for_stdout, run_gitlet_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn init_creates_an_empty_repository_on_master(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["init"]).assert().success();

    assert!(dir.path().join(".gitlet").is_dir());

    let log = run_for_stdout(dir.path(), &["log"]);
    assert!(log.contains("initial commit"));
    assert!(log.contains("Date: Thu Jan 1 00:00:00 1970 +0000"));
}

#[rstest]
fn init_twice_reports_the_existing_repository(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A Gitlet version-control system already exists in the current directory.",
        ));
}

#[rstest]
fn initial_commit_is_identical_across_repositories(
    #[from(init_repository_dir)] first: TempDir,
    #[from(init_repository_dir)] second: TempDir,
) {
    pretty_assertions::assert_eq!(
        run_for_stdout(first.path(), &["log"]),
        run_for_stdout(second.path(), &["log"])
    );
}

#[rstest]
fn commands_outside_a_repository_are_rejected(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not in an initialized Gitlet directory.",
        ));
}
