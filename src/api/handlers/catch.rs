//! Catch-all handler: forwards requests to the clients listening on their host.

use axum::{
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Redirect, Response},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::application::services::Outcome;
use crate::domain::caught_request::CaughtRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_host;

/// Buffers the request and broadcasts it to its host's clients.
///
/// Returns whether anyone was listening.
///
/// # Errors
///
/// - [`AppError::Validation`] if the `Host` header is missing
/// - [`AppError::PayloadTooLarge`] if the body exceeds `max_body_bytes`
pub(crate) async fn capture(state: &AppState, req: Request) -> Result<bool, AppError> {
    extract_host(req.headers())?;

    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let limit = state.config.max_body_bytes;
    let (parts, body) = req.into_parts();

    // Other body errors mean the client went away; nobody reads the status.
    let body = axum::body::to_bytes(body, limit)
        .await
        .map_err(|_| AppError::payload_too_large(limit))?;

    let caught = CaughtRequest::new(
        &parts.method,
        &parts.uri,
        parts.version,
        &parts.headers,
        remote_addr,
        &body,
    );

    let host = caught.host.clone();
    let delivered = state.catcher.catch(caught);
    debug!(%host, path = %parts.uri.path(), delivered, "Request captured");

    Ok(delivered)
}

/// Catches a request and reports the outcome to the sender.
///
/// # Response
///
/// - **200** `request caught` when at least one client listens on the host
/// - **303** to `redirect_dest` when nobody listens and a destination is configured
/// - **200** `request ignored` otherwise
pub async fn catch_request(state: AppState, req: Request) -> Result<Response, AppError> {
    if capture(&state, req).await? {
        state.stats.record(Outcome::Caught);
        return Ok("request caught".into_response());
    }

    state.stats.record(Outcome::Ignored);

    match state.config.redirect_dest.as_deref() {
        Some(dest) => Ok(Redirect::to(dest).into_response()),
        None => Ok("request ignored".into_response()),
    }
}

/// Router fallback for every path without a dedicated route.
pub async fn catch_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    catch_request(state, req).await
}
