//! HTTP layer: handlers for catching, streaming and status, plus middleware.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, redirects, caching and tracing middleware

pub mod handlers;
pub mod middleware;
