//! Websocket endpoint that streams caught requests to a browser.

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    http::HeaderMap,
    response::Response,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::application::services::{Outcome, Subscription};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_host;

/// Upgrades to a websocket and subscribes it to the request's host.
///
/// # Endpoint
///
/// `GET /init-client`
///
/// The subscription is taken before the upgrade completes, so requests sent
/// right after the handshake are not missed. If the upgrade fails the
/// subscription is dropped with the callback.
///
/// # Errors
///
/// Returns 400 Bad Request if the Host header is missing or invalid.
pub async fn init_client_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let host = extract_host(&headers)?;
    state.stats.record(Outcome::ClientInit);

    let subscription = state.catcher.subscribe(&host);
    info!(host = %subscription.host(), "Initializing a new client");

    Ok(ws.on_upgrade(move |socket| run_client(socket, subscription)))
}

/// Pumps caught requests into the socket until either side goes away.
async fn run_client(mut socket: WebSocket, mut subscription: Subscription) {
    loop {
        tokio::select! {
            caught = subscription.recv() => match caught {
                Ok(request) => {
                    let payload = match serde_json::to_string(request.as_ref()) {
                        Ok(payload) => payload,
                        Err(e) => {
                            error!("Failed to encode caught request: {}", e);
                            continue;
                        }
                    };
                    if socket.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(host = %subscription.host(), skipped, "Client lagging, requests dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    info!(host = %subscription.host(), "Client disconnected");
}
