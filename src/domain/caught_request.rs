//! Snapshot of an HTTP request sent to a listened subdomain.

use axum::http::{HeaderMap, Method, Uri, Version, header};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;

/// A caught request as delivered to websocket clients.
///
/// Header and form maps keep every value for repeated names and are ordered
/// by name so clients render them consistently.
#[derive(Debug, Clone, Serialize)]
pub struct CaughtRequest {
    pub time: DateTime<Utc>,
    pub host: String,
    pub path: String,
    pub method: String,
    pub query: String,
    pub headers: BTreeMap<String, Vec<String>>,
    pub form: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,
    pub body: String,
    pub raw_request: String,
}

impl CaughtRequest {
    /// Builds a snapshot from request parts and an already buffered body.
    pub fn new(
        method: &Method,
        uri: &Uri,
        version: Version,
        headers: &HeaderMap,
        remote_addr: Option<SocketAddr>,
        body: &[u8],
    ) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let query = uri.query().unwrap_or_default().to_string();
        let body = String::from_utf8_lossy(body).into_owned();

        let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in headers {
            header_map
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let mut form: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut decode = |input: &[u8]| {
            for (key, value) in url::form_urlencoded::parse(input) {
                form.entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        };
        decode(query.as_bytes());
        if is_form_encoded(headers) {
            decode(body.as_bytes());
        }

        let raw_request = render_raw(method, uri, version, headers, &body);

        Self {
            time: Utc::now(),
            host,
            path: uri.path().to_string(),
            method: method.to_string(),
            query,
            headers: header_map,
            form,
            remote_addr: remote_addr.map(|a| a.to_string()),
            body,
            raw_request,
        }
    }
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Reconstructs the request in HTTP/1.x wire form.
fn render_raw(
    method: &Method,
    uri: &Uri,
    version: Version,
    headers: &HeaderMap,
    body: &str,
) -> String {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let mut raw = format!("{method} {target} {version:?}\r\n");
    for (name, value) in headers {
        raw.push_str(name.as_str());
        raw.push_str(": ");
        raw.push_str(&String::from_utf8_lossy(value.as_bytes()));
        raw.push_str("\r\n");
    }
    raw.push_str("\r\n");
    raw.push_str(body);
    raw
}
