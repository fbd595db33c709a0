use crate::common::command::{
    commit_file, init_repository_dir, run_for_stdout, run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn added_file_is_listed_as_staged(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    write_file(FileSpec::new(dir.path().join("notes.txt"), content));

    run_gitlet_command(dir.path(), &["add", "notes.txt"])
        .assert()
        .success();

    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\nnotes.txt\n"));
}

#[rstest]
fn adding_a_missing_file_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist."));
}

#[rstest]
fn restaging_the_head_version_clears_the_stage(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "story.txt", "first draft\n", "Add story");

    write_file(FileSpec::new(
        dir.path().join("story.txt"),
        "second draft\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "story.txt"])
        .assert()
        .success();

    // Putting the committed content back and re-adding cancels the stage.
    write_file(FileSpec::new(
        dir.path().join("story.txt"),
        "first draft\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "story.txt"])
        .assert()
        .success();

    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn commit_records_the_snapshot_and_clears_the_stage(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    commit_file(dir.path(), "a.txt", "alpha\n", "Add a");

    let log = run_for_stdout(dir.path(), &["log"]);
    assert!(log.contains("Add a"));
    assert!(log.contains("initial commit"));

    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn commit_with_an_empty_message_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "alpha\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["commit", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a commit message."));

    // The rejected commit left the stage untouched.
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\na.txt\n"));
}

#[rstest]
fn commit_without_staged_changes_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["commit", "Nothing here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn rm_unstages_without_deleting_the_working_copy(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("draft.txt"),
        "draft\n".to_string(),
    ));
    run_gitlet_command(dir.path(), &["add", "draft.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm", "draft.txt"])
        .assert()
        .success();

    assert!(dir.path().join("draft.txt").is_file());
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));

    // Once unstaged the file is plain untracked, so a second rm has no work.
    run_gitlet_command(dir.path(), &["rm", "draft.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reason to remove the file."));
}

#[rstest]
fn rm_on_a_tracked_file_deletes_it_and_stages_the_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "old.txt", "old\n", "Add old");

    run_gitlet_command(dir.path(), &["rm", "old.txt"])
        .assert()
        .success();

    assert!(!dir.path().join("old.txt").exists());
    let status = run_for_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Removed Files ===\nold.txt\n"));

    run_gitlet_command(dir.path(), &["commit", "Remove old"])
        .assert()
        .success();

    // HEAD no longer tracks the path.
    run_gitlet_command(dir.path(), &["checkout", "--", "old.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn rm_without_a_reason_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("loose.txt"),
        "untracked\n".to_string(),
    ));

    run_gitlet_command(dir.path(), &["rm", "loose.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reason to remove the file."));
}
