//! Handler for the plain-text status report.

use axum::extract::State;

use crate::state::AppState;

/// Returns uptime, listened host count, and request counters.
///
/// # Endpoint
///
/// `ANY /statusz`
///
/// # Response
///
/// ```text
/// uptime: 3600
/// hosts: 2
/// index: 14
/// caught: 120
/// ignored: 9
/// client-init: 5
/// ```
pub async fn statusz_handler(State(state): State<AppState>) -> String {
    state.stats.render(state.catcher.host_count())
}
