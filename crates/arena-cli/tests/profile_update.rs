//! Profile update flow against a mock backend, including the two-step
//! avatar upload.

mod fixtures;

use std::io::Write;

use fixtures::{arena_cmd, envelope_fail, envelope_ok, write_session};
use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn me_body() -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "username": "kiran",
        "full_name": "Kiran Rahman",
        "ign": "NightStalker",
        "avatar_url": "https://cdn.example.com/old.jpg",
        "wallet": { "balance": 120.5 }
    })
}

fn temp_avatar(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("avatar.jpg");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
    path
}

/// Update with a new avatar: upload first, then the update carries the
/// hosted URL.
#[tokio::test(flavor = "multi_thread")]
async fn test_update_uploads_avatar_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(envelope_ok(me_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/files/upload-avatar"))
        .respond_with(envelope_ok(serde_json::json!({
            "image_url": "https://cdn.example.com/new.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .and(body_partial_json(serde_json::json!({
            "full_name": "Kiran R.",
            "avatar_url": "https://cdn.example.com/new.jpg"
        })))
        .respond_with(envelope_ok(serde_json::json!({
            "id": "1",
            "username": "kiran",
            "full_name": "Kiran R.",
            "ign": "NightStalker"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args([
            "profile",
            "update",
            "--full-name",
            "Kiran R.",
            "--avatar",
            temp_avatar(&images).to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated successfully!"));

    // Upload strictly precedes the update request.
    let order: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .filter(|p| p != "/auth/me")
        .collect();
    assert_eq!(order, vec!["/files/upload-avatar", "/auth/profile"]);
}

/// Failed avatar upload aborts the flow; no update request is sent.
#[tokio::test(flavor = "multi_thread")]
async fn test_update_failed_upload_skips_update() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(envelope_ok(me_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/files/upload-avatar"))
        .respond_with(envelope_fail("Image too large"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let images = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args([
            "profile",
            "update",
            "--avatar",
            temp_avatar(&images).to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image too large"));
}

/// Local validation failure (full name too short) never reaches the wire.
#[tokio::test(flavor = "multi_thread")]
async fn test_update_validates_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(envelope_ok(me_body()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args(["profile", "update", "--full-name", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Full name must be at least 3 characters",
        ));
}
