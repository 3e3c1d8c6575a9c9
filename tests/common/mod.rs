#![allow(dead_code)]

use axum_test::TestServer;
use request_catcher::config::Config;
use request_catcher::routes::app_router;
use request_catcher::state::AppState;

pub const ROOT_HOST: &str = "requestcatcher.test";

pub fn test_config() -> Config {
    Config {
        http_port: 8080,
        host: "127.0.0.1".to_string(),
        root_host: ROOT_HOST.to_string(),
        frontend_dir: "frontend/static".to_string(),
        favicon: "frontend/favicon.ico".to_string(),
        redirect_dest: None,
        status_password: None,
        max_body_bytes: 1024,
        request_timeout_secs: 10,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

/// Builds the full application around `config`, returning the state so tests
/// can subscribe to hosts and inspect counters.
pub fn create_test_server(config: Config) -> (TestServer, AppState) {
    let state = AppState::new(config);
    let server = TestServer::new(app_router(state.clone())).unwrap();
    (server, state)
}

/// Like [`create_test_server`] but listening on a real socket, which
/// websocket tests need.
pub fn create_http_test_server(config: Config) -> (TestServer, AppState) {
    let state = AppState::new(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app_router(state.clone()))
        .unwrap();
    (server, state)
}
