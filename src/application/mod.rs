//! Application layer services.
//!
//! Services hold the shared runtime state behind the HTTP handlers and expose a
//! small API for them.
//!
//! # Available Services
//!
//! - [`services::catcher_service::CatcherService`] - Listened hosts and request fan-out
//! - [`services::stats_service::StatsService`] - Request counters for `/statusz`

pub mod services;
