use crate::common::command::{
    commit_file, commit_ids, init_repository_dir, run_for_stdout, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn checkout_file_restores_the_head_version(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "config.txt", "committed\n", "Add config");

    write_file(FileSpec::new(
        dir.path().join("config.txt"),
        "scribbles\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "--", "config.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("config.txt")), "committed\n");
}

#[rstest]
fn checkout_file_from_an_earlier_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "config.txt", "version one\n", "Add config");
    commit_file(dir.path(), "config.txt", "version two\n", "Tweak config");
    let earlier_commit_id = commit_ids(dir.path())[1].clone();

    run_gitlet_command(
        dir.path(),
        &["checkout", &earlier_commit_id, "--", "config.txt"],
    )
    .assert()
    .success();

    assert_eq!(read_file(&dir.path().join("config.txt")), "version one\n");
}

#[rstest]
fn short_commit_ids_resolve_to_full_ones(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "config.txt", "version one\n", "Add config");
    commit_file(dir.path(), "config.txt", "version two\n", "Tweak config");
    let short_id = commit_ids(dir.path())[1][..8].to_string();

    run_gitlet_command(dir.path(), &["checkout", &short_id, "--", "config.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("config.txt")), "version one\n");
}

#[rstest]
fn short_ids_under_four_characters_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "config.txt", "version one\n", "Add config");

    run_gitlet_command(dir.path(), &["checkout", "abc", "--", "config.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Commit id should contain at least 4 characters.",
        ));
}

#[rstest]
fn unknown_commit_ids_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let bogus_id = "0123456789abcdef0123456789abcdef01234567";

    run_gitlet_command(dir.path(), &["checkout", bogus_id, "--", "config.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn files_absent_from_the_named_commit_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "late.txt", "late\n", "Add late");
    let initial_commit_id = commit_ids(dir.path())[1].clone();

    run_gitlet_command(
        dir.path(),
        &["checkout", &initial_commit_id, "--", "late.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn checkout_branch_swaps_the_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "b.txt", "beta\n", "Add b");

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("a.txt")), "alpha\n");
    assert!(!dir.path().join("b.txt").exists());
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Branches ===\n*feature\nmaster\n"));

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("b.txt")), "beta\n");
}

#[rstest]
fn checkout_of_the_current_branch_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No need to checkout the current branch.",
        ));
}

#[rstest]
fn checkout_of_an_unknown_branch_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "phantom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No such branch exists."));
}

#[rstest]
fn untracked_file_in_the_way_blocks_branch_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "shared.txt", "theirs\n", "Add shared");
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["rm", "shared.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "Drop shared"])
        .assert()
        .success();

    // Recreate the path untracked, with content the target would overwrite.
    write_file(FileSpec::new(
        dir.path().join("shared.txt"),
        "mine\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    // Nothing moved: same branch, same working file.
    assert_eq!(read_file(&dir.path().join("shared.txt")), "mine\n");
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Branches ===\n*master\n"));
}

#[rstest]
fn identical_untracked_copy_does_not_block_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "shared.txt", "theirs\n", "Add shared");
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["rm", "shared.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "Drop shared"])
        .assert()
        .success();

    // Byte-identical to the target's version, so nothing would be lost.
    write_file(FileSpec::new(
        dir.path().join("shared.txt"),
        "theirs\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("shared.txt")), "theirs\n");
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Branches ===\n*feature\nmaster\n"));
}

#[rstest]
fn branch_checkout_discards_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("new.txt"),
        "staged but never committed\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    // The staged file is neither on disk nor staged anymore.
    assert!(!dir.path().join("new.txt").exists());
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
}
