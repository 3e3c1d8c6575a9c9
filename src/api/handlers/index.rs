//! Handler for `/`, which differs between the root host and catcher hosts.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};

use crate::api::handlers::catch::capture;
use crate::application::services::Outcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{extract_host, host_without_port, port_suffix};
use crate::web::handlers::{CatcherTemplate, root_page};

/// Serves the landing page on the root host and the catcher page elsewhere.
///
/// # Endpoint
///
/// `ANY /`
///
/// On a catcher host the request itself is caught as well, since senders
/// often hit the bare subdomain first.
pub async fn index_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let host = extract_host(req.headers())?;

    if host_without_port(&host) == state.config.root_host {
        return Ok(root_page(req.headers())?.into_response());
    }

    capture(&state, req).await?;
    state.stats.record(Outcome::Index);

    // Link back on the port the request came in on.
    let root_host = format!("{}{}", state.config.root_host, port_suffix(&host));

    Ok(CatcherTemplate { host, root_host }.into_response())
}
