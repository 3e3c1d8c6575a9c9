//! Host and protocol extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Returns the `Host` header exactly as sent, port included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    Ok(host.to_string())
}

/// Strips the port from a host string.
///
/// Handles:
/// - IPv4 addresses (e.g., `192.168.1.1:80`)
/// - IPv6 addresses (e.g., `[::1]:8080`)
/// - Hostnames with ports (e.g., `example.com:3000`)
/// - Plain hostnames (e.g., `example.com`)
pub fn host_without_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}

/// The `:port` part of a host string, or `""` when it carries none.
pub fn port_suffix(host: &str) -> &str {
    &host[host_without_port(host).len()..]
}

/// Protocol the client used, with trailing colon (`http:` / `https:`).
///
/// Taken from `X-Forwarded-Proto` when a proxy sets it, `http:` otherwise.
pub fn request_protocol(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");

    format!("{}:", scheme.to_ascii_lowercase())
}
