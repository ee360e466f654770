//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use wiremock::ResponseTemplate;

/// Builds the arena binary command pointed at a mock server and an
/// isolated home directory.
pub fn arena_cmd(home: &Path, base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("arena").expect("arena binary");
    cmd.env("ARENA_HOME", home)
        .env("ARENA_BASE_URL", base_url)
        .env("ARENA_BLOCK_REAL_API", "1");
    cmd
}

/// Writes a stored session so authenticated commands have a token.
pub fn write_session(home: &Path, token: &str) {
    std::fs::create_dir_all(home).unwrap();
    std::fs::write(
        home.join("session.json"),
        serde_json::json!({
            "token": token,
            "user_id": "1",
            "username": "kiran",
        })
        .to_string(),
    )
    .unwrap();
}

/// Success envelope wrapping a data payload.
pub fn envelope_ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "data": data,
    }))
}

/// Application-level failure: HTTP 200 with success=false.
pub fn envelope_fail(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": false,
        "message": message,
    }))
}

/// Acknowledgement envelope with no data payload.
pub fn envelope_ack(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "message": message,
    }))
}

/// A single open tournament with one seat left.
pub fn night_cup() -> serde_json::Value {
    serde_json::json!([{
        "id": "5",
        "title": "Night Cup",
        "game": "Free Fire",
        "mode": "Squad",
        "status": "Open",
        "entry_fee": 50,
        "prize_pool": 500,
        "participants_count": 3,
        "max_participants": 4,
    }])
}
