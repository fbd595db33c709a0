use crate::common::command::{
    commit_file, commit_ids, init_repository_dir, run_for_stdout, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn branch_points_at_head_without_switching(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");

    run_gitlet_command(dir.path(), &["branch", "snapshot"])
        .assert()
        .success();

    // Still on master; the new branch keeps the old tree.
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Branches ===\n*master\nsnapshot\n"));

    commit_file(dir.path(), "a.txt", "alpha two\n", "Tweak a");
    run_gitlet_command(dir.path(), &["checkout", "snapshot"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("a.txt")), "alpha\n");
}

#[rstest]
fn duplicate_branch_names_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

#[rstest]
fn rm_branch_deletes_only_the_pointer(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");
    run_gitlet_command(dir.path(), &["branch", "doomed"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm-branch", "doomed"])
        .assert()
        .success();

    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(!status.contains("doomed"));
    // The commits the branch pointed at are still in the store.
    let global_log = run_for_stdout(dir.path(), &["global-log"]);
    assert!(global_log.contains("Add a"));
}

#[rstest]
fn rm_branch_refuses_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot remove the current branch."));
}

#[rstest]
fn rm_branch_of_an_unknown_branch_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "phantom"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}

#[rstest]
fn reset_moves_the_branch_and_restores_the_snapshot(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "keep.txt", "version one\n", "Add keep");
    commit_file(dir.path(), "keep.txt", "version two\n", "Tweak keep");
    commit_file(dir.path(), "extra.txt", "extra\n", "Add extra");
    let target_commit_id = commit_ids(dir.path())[2].clone();

    run_gitlet_command(dir.path(), &["reset", &target_commit_id])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("keep.txt")), "version one\n");
    assert!(!dir.path().join("extra.txt").exists());
    assert_eq!(commit_ids(dir.path())[0], target_commit_id);
}

#[rstest]
fn reset_discards_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");
    let head_commit_id = commit_ids(dir.path())[0].clone();

    write_file(FileSpec::new(
        dir.path().join("pending.txt"),
        "pending\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "pending.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["reset", &head_commit_id])
        .assert()
        .success();

    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(!dir.path().join("pending.txt").exists());
}

#[rstest]
fn reset_with_an_untracked_file_in_the_way_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "shared.txt", "theirs\n", "Add shared");
    run_gitlet_command(dir.path(), &["rm", "shared.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "Drop shared"])
        .assert()
        .success();
    let earlier_commit_id = commit_ids(dir.path())[1].clone();

    write_file(FileSpec::new(
        dir.path().join("shared.txt"),
        "mine\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["reset", &earlier_commit_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));
    assert_eq!(read_file(&dir.path().join("shared.txt")), "mine\n");
}
