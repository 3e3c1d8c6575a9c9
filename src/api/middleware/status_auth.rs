//! HTTP basic authentication for the status report.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{error::AppError, state::AppState};

type HmacSha256 = Hmac<Sha256>;

/// Realm announced in `WWW-Authenticate`.
pub const REALM: &str = "admin";

/// Requires basic auth on the wrapped routes when `status_password` is configured.
///
/// The username is ignored; only the password is checked.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="admin"` if
/// the header is missing, malformed, or carries the wrong password.
///
/// # Example
///
/// ```rust,ignore
/// let statusz = Router::new()
///     .route("/statusz", any(statusz_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), status_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = st.config.status_password.as_deref() else {
        return Ok(next.run(req).await);
    };

    let (mut parts, body) = req.into_parts();

    let AuthBasic((_user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Unauthorized", REALM))?;

    if !password_matches(expected, password.as_deref().unwrap_or_default()) {
        return Err(AppError::unauthorized("Unauthorized", REALM));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Compares passwords in constant time.
///
/// Both sides are turned into HMAC tags over the realm and the tags are
/// compared with [`Mac::verify_slice`], so timing does not depend on where
/// the inputs differ.
fn password_matches(expected: &str, provided: &str) -> bool {
    let tag = |key: &str| -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes()).ok()?;
        mac.update(REALM.as_bytes());
        Some(mac)
    };

    match (tag(expected), tag(provided)) {
        (Some(expected), Some(provided)) => {
            let expected = expected.finalize().into_bytes();
            provided.verify_slice(&expected).is_ok()
        }
        _ => false,
    }
}
