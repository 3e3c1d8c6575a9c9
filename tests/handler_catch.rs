mod common;

use axum::http::StatusCode;
use common::{create_test_server, test_config};
use request_catcher::prelude::Outcome;

#[tokio::test]
async fn test_unlistened_request_is_ignored() {
    let (server, state) = create_test_server(test_config());

    let response = server
        .post("/webhook")
        .add_header("Host", "nobody.requestcatcher.test")
        .text("payload")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "request ignored");
    assert_eq!(state.stats.get(Outcome::Ignored), 1);
    assert_eq!(state.stats.get(Outcome::Caught), 0);
}

#[tokio::test]
async fn test_unlistened_request_redirects_when_configured() {
    let mut config = test_config();
    config.redirect_dest = Some("https://requestcatcher.test/".to_string());
    let (server, state) = create_test_server(config);

    let response = server
        .get("/anything")
        .add_header("Host", "nobody.requestcatcher.test")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "https://requestcatcher.test/");
    assert_eq!(state.stats.get(Outcome::Ignored), 1);
}

#[tokio::test]
async fn test_listened_request_is_broadcast() {
    let (server, state) = create_test_server(test_config());
    let mut subscription = state.catcher.subscribe("foo.requestcatcher.test");

    let response = server
        .put("/hooks/github?delivery=42")
        .add_header("Host", "foo.requestcatcher.test:8080")
        .add_header("X-Event", "push")
        .text("hello catcher")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "request caught");
    assert_eq!(state.stats.get(Outcome::Caught), 1);

    let caught = subscription.recv().await.unwrap();
    assert_eq!(caught.method, "PUT");
    assert_eq!(caught.path, "/hooks/github");
    assert_eq!(caught.query, "delivery=42");
    assert_eq!(caught.host, "foo.requestcatcher.test:8080");
    assert_eq!(caught.body, "hello catcher");
    assert_eq!(caught.headers["x-event"], vec!["push"]);
    assert_eq!(caught.form["delivery"], vec!["42"]);
}

#[tokio::test]
async fn test_other_hosts_are_not_delivered() {
    let (server, state) = create_test_server(test_config());
    let _subscription = state.catcher.subscribe("foo.requestcatcher.test");

    let response = server
        .get("/")
        .add_header("Host", "bar.requestcatcher.test")
        .await;

    response.assert_status_ok();
    assert_eq!(state.stats.get(Outcome::Caught), 0);
}

#[tokio::test]
async fn test_catcher_index_is_caught_and_served() {
    let (server, state) = create_test_server(test_config());
    let mut subscription = state.catcher.subscribe("foo.requestcatcher.test");

    let response = server
        .get("/")
        .add_header("Host", "foo.requestcatcher.test")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("foo.requestcatcher.test"));
    assert!(html.contains("/assets/catcher.js"));
    assert_eq!(state.stats.get(Outcome::Index), 1);

    let caught = subscription.recv().await.unwrap();
    assert_eq!(caught.path, "/");
}

#[tokio::test]
async fn test_catcher_index_without_listener_still_served() {
    let (server, state) = create_test_server(test_config());

    let response = server
        .get("/")
        .add_header("Host", "lonely.requestcatcher.test")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("lonely.requestcatcher.test"));
    assert_eq!(state.stats.get(Outcome::Index), 1);
    assert_eq!(state.stats.get(Outcome::Ignored), 0);
}

#[tokio::test]
async fn test_catcher_page_links_back_on_request_port() {
    let (server, _state) = create_test_server(test_config());

    let response = server
        .get("/")
        .add_header("Host", "foo.requestcatcher.test:8080")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"href="//requestcatcher.test:8080/""#));
}

#[tokio::test]
async fn test_catcher_page_links_back_without_port() {
    let (server, _state) = create_test_server(test_config());

    let response = server
        .get("/")
        .add_header("Host", "foo.requestcatcher.test")
        .await;

    assert!(response.text().contains(r#"href="//requestcatcher.test/""#));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let (server, state) = create_test_server(test_config());
    let _subscription = state.catcher.subscribe("foo.requestcatcher.test");

    let response = server
        .post("/upload")
        .add_header("Host", "foo.requestcatcher.test")
        .text("x".repeat(4096))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "payload_too_large");
    assert_eq!(state.stats.get(Outcome::Caught), 0);
}

#[tokio::test]
async fn test_missing_host_header() {
    let (server, _state) = create_test_server(test_config());

    let response = server.get("/anything").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
