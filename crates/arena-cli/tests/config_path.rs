//! Config command tests.

mod fixtures;

use fixtures::arena_cmd;
use predicates::prelude::*;

/// `config path` respects ARENA_HOME.
#[test]
fn test_config_path_uses_arena_home() {
    let home = tempfile::tempdir().unwrap();
    arena_cmd(home.path(), "http://127.0.0.1:1")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(home.path().to_str().unwrap()));
}

/// `config init` creates the template once and refuses to overwrite.
#[test]
fn test_config_init_creates_template() {
    let home = tempfile::tempdir().unwrap();
    arena_cmd(home.path(), "http://127.0.0.1:1")
        .args(["config", "init"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("# Arena Configuration"));

    arena_cmd(home.path(), "http://127.0.0.1:1")
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
