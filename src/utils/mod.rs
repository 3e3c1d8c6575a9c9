//! Request helpers shared by handlers and middleware.
//!
//! - [`request_origin`] - Host and protocol extraction from HTTP headers

pub mod request_origin;
