//! Join-tournament flow against a mock backend.

mod fixtures;

use fixtures::{arena_cmd, envelope_ack, envelope_ok, night_cup, write_session};
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Joining issues one POST with the IGN payload.
#[tokio::test(flavor = "multi_thread")]
async fn test_join_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournaments"))
        .respond_with(envelope_ok(night_cup()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tournaments/5/join"))
        .and(body_json(serde_json::json!({ "ign": "NightStalker" })))
        .respond_with(envelope_ack("Successfully joined tournament!"))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args(["tournaments", "join", "5", "--ign", "NightStalker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully joined tournament!"));
}

/// A full tournament is rejected locally: the join endpoint is never hit.
#[tokio::test(flavor = "multi_thread")]
async fn test_join_full_tournament_is_local() {
    let server = MockServer::start().await;
    let mut body = night_cup();
    body[0]["participants_count"] = serde_json::json!(4);
    Mock::given(method("GET"))
        .and(path("/tournaments"))
        .respond_with(envelope_ok(body))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tournaments/5/join"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args(["tournaments", "join", "5", "--ign", "NightStalker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tournament is full"));
}

/// Unknown tournament id fails before any join request.
#[tokio::test(flavor = "multi_thread")]
async fn test_join_unknown_tournament() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournaments"))
        .respond_with(envelope_ok(night_cup()))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    write_session(home.path(), "tok_123");

    arena_cmd(home.path(), &server.uri())
        .args(["tournaments", "join", "404", "--ign", "NightStalker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tournament not found"));
}
