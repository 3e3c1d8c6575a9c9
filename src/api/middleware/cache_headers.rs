//! Long-lived cache headers for static assets.

use axum::http::{HeaderValue, header};
use chrono::{Duration, Utc};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::{MakeHeaderValue, SetResponseHeader, SetResponseHeaderLayer};

/// `Expires` value one year ahead of the response time, in HTTP-date form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneYearFromNow;

impl<T> MakeHeaderValue<T> for OneYearFromNow {
    fn make_header_value(&mut self, _message: &T) -> Option<HeaderValue> {
        let expires = Utc::now() + Duration::days(365);
        HeaderValue::from_str(&expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string()).ok()
    }
}

pub type CachedDir = SetResponseHeader<SetResponseHeader<ServeDir, OneYearFromNow>, HeaderValue>;

/// Serves `dir` with `Cache-Control: public, max-age=31536000` and a matching `Expires`.
pub fn cached_dir(dir: &str) -> CachedDir {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            OneYearFromNow,
        ))
        .service(ServeDir::new(dir))
}
