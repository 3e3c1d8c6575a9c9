//! Domain layer: the values and behaviour the service is built around.
//!
//! - [`navigation`] - Composing `protocol//subdomain.host/` targets
//! - [`page`] - Landing page initializer and submit handling
//! - [`caught_request`] - Snapshot of a request delivered to listening clients
//!
//! Nothing here depends on the HTTP server or on shared state; handlers in
//! [`crate::api`] and [`crate::web`] drive these types.

pub mod caught_request;
pub mod navigation;
pub mod page;
