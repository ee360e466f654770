//! Smoke tests for the CLI surface.

mod fixtures;

use fixtures::arena_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    arena_cmd(home.path(), "http://127.0.0.1:1")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("tournaments")
                .and(predicate::str::contains("wallet"))
                .and(predicate::str::contains("notifications"))
                .and(predicate::str::contains("leaderboard"))
                .and(predicate::str::contains("profile"))
                .and(predicate::str::contains("upload")),
        );
}

#[test]
fn test_tournaments_help() {
    let home = tempfile::tempdir().unwrap();
    arena_cmd(home.path(), "http://127.0.0.1:1")
        .args(["tournaments", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("join"))
                .and(predicate::str::contains("my")),
        );
}

#[test]
fn test_unknown_command_fails() {
    let home = tempfile::tempdir().unwrap();
    arena_cmd(home.path(), "http://127.0.0.1:1")
        .arg("frobnicate")
        .assert()
        .failure();
}
