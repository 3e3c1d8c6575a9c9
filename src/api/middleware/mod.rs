//! HTTP middleware for request processing and protection.
//!
//! Provides status authentication, host normalization, asset caching, and
//! observability middleware.

pub mod cache_headers;
pub mod status_auth;
pub mod tracing;
pub mod www_redirect;
