//! Redirects `www.` hosts to the bare host.

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Sends `www.<host>` requests to `<host>` with the same path and query.
///
/// Uses a scheme-relative `Location` (`//host/path`) so the client keeps its
/// scheme, answers `307 Temporary Redirect`, and closes the connection.
pub async fn layer(req: Request, next: Next) -> Response {
    if let Some(target) = bare_host_target(&req) {
        let mut response = Redirect::temporary(&target).into_response();
        response
            .headers_mut()
            .insert(header::CONNECTION, HeaderValue::from_static("close"));
        return response;
    }

    next.run(req).await
}

fn bare_host_target(req: &Request) -> Option<String> {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())?
        .strip_prefix("www.")
        .filter(|host| !host.is_empty())?;

    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Some(format!("//{host}{path}"))
}
