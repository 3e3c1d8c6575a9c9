mod common;

use axum::http::StatusCode;
use common::{create_test_server, test_config};
use request_catcher::prelude::Outcome;

#[tokio::test]
async fn test_www_host_redirects_to_bare_host() {
    let (server, state) = create_test_server(test_config());

    let response = server
        .get("/some/path?x=1")
        .add_header("Host", "www.requestcatcher.test")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location"),
        "//requestcatcher.test/some/path?x=1"
    );
    assert_eq!(response.header("connection"), "close");
    assert_eq!(state.stats.get(Outcome::Ignored), 0);
}

#[tokio::test]
async fn test_bare_www_host_is_not_redirected() {
    let (server, state) = create_test_server(test_config());

    let response = server.get("/hook").add_header("Host", "www.").await;

    response.assert_status_ok();
    assert!(response.maybe_header("location").is_none());
    assert_eq!(response.text(), "request ignored");
    assert_eq!(state.stats.get(Outcome::Ignored), 1);
}

#[tokio::test]
async fn test_assets_carry_cache_headers() {
    let (server, _state) = create_test_server(test_config());

    let response = server
        .get("/assets/root.js")
        .add_header("Host", "requestcatcher.test")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("cache-control"),
        "public, max-age=31536000"
    );
    assert!(
        response
            .header("expires")
            .to_str()
            .unwrap()
            .ends_with(" GMT")
    );
    assert!(response.text().contains("preventDefault"));
}

#[tokio::test]
async fn test_init_client_rejects_other_methods() {
    let (server, state) = create_test_server(test_config());

    let response = server
        .post("/init-client")
        .add_header("Host", "foo.requestcatcher.test")
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(state.stats.get(Outcome::ClientInit), 0);
}

#[tokio::test]
async fn test_init_client_requires_websocket_upgrade() {
    let (server, state) = create_test_server(test_config());

    let response = server
        .get("/init-client")
        .add_header("Host", "foo.requestcatcher.test")
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(state.catcher.host_count(), 0);
}
