use crate::common::command::{init_repository_dir, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn missing_command_word_is_reported(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a command."));
}

#[rstest]
fn unknown_commands_are_rejected_even_outside_a_repository(repository_dir: TempDir) {
    let dir = repository_dir;

    run_gitlet_command(dir.path(), &["frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No command with that name exists."));
}

#[rstest]
fn wrong_operand_counts_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["add", "one.txt", "two.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect operands."));

    run_gitlet_command(dir.path(), &["log", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect operands."));
}

#[rstest]
fn misplaced_checkout_separator_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "branch", "file.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect operands."));

    run_gitlet_command(dir.path(), &["checkout", "a", "b", "c", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect operands."));
}

#[rstest]
fn initialization_is_checked_before_operand_counts(repository_dir: TempDir) {
    let dir = repository_dir;

    // `add` with no operand would be an arity error, but the repository
    // check comes first.
    run_gitlet_command(dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not in an initialized Gitlet directory.",
        ));
}
