//! # Request Catcher
//!
//! An HTTP service that catches every request sent to a subdomain and streams
//! it, live, to browsers watching that subdomain.
//!
//! ## How it works
//!
//! 1. A visitor opens the landing page on the root host, types a subdomain and
//!    is sent to `<protocol>//<subdomain>.<root host>/` ([`domain::page`],
//!    [`domain::navigation`]).
//! 2. The catcher page there opens a websocket on `/init-client`, which
//!    subscribes to the host ([`application::services::CatcherService`]).
//! 3. Any request to that host is snapshotted ([`domain::caught_request`]) and
//!    broadcast to every subscribed browser.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Navigation, landing page behaviour, caught requests
//! - **Application Layer** ([`application`]) - Host registry and counters
//! - **API Layer** ([`api`]) - Catch-all, websocket, status handlers and middleware
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Configuration
//!
//! Loaded from environment variables and an optional JSON file via
//! [`config::load`]. See [`config`] for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatcherService, Outcome, StatsService};
    pub use crate::config::Config;
    pub use crate::domain::caught_request::CaughtRequest;
    pub use crate::domain::navigation::NavigationTarget;
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
