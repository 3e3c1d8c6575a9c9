//! Business logic services for the application layer.

pub mod catcher_service;
pub mod stats_service;

pub use catcher_service::{CatcherService, Subscription};
pub use stats_service::{Outcome, StatsService};
