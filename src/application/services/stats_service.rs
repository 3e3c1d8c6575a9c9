//! Process-wide request counters reported by `/statusz`.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// How a request was handled, for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `GET /` on a catcher subdomain.
    Index,
    /// Delivered to at least one client.
    Caught,
    /// Nobody listened on the host.
    Ignored,
    /// Websocket client connected.
    ClientInit,
}

impl Outcome {
    fn label(self) -> &'static str {
        match self {
            Outcome::Index => "index",
            Outcome::Caught => "caught",
            Outcome::Ignored => "ignored",
            Outcome::ClientInit => "client-init",
        }
    }
}

/// Counters since process start.
///
/// Each increment is also forwarded to the `metrics` facade as
/// `catcher_requests_total{outcome=...}`.
#[derive(Debug)]
pub struct StatsService {
    process_start: Instant,
    index: AtomicU64,
    caught: AtomicU64,
    ignored: AtomicU64,
    client_init: AtomicU64,
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            process_start: Instant::now(),
            index: AtomicU64::new(0),
            caught: AtomicU64::new(0),
            ignored: AtomicU64::new(0),
            client_init: AtomicU64::new(0),
        }
    }

    fn counter(&self, outcome: Outcome) -> &AtomicU64 {
        match outcome {
            Outcome::Index => &self.index,
            Outcome::Caught => &self.caught,
            Outcome::Ignored => &self.ignored,
            Outcome::ClientInit => &self.client_init,
        }
    }

    pub fn record(&self, outcome: Outcome) {
        self.counter(outcome).fetch_add(1, Ordering::Relaxed);
        metrics::counter!("catcher_requests_total", "outcome" => outcome.label()).increment(1);
    }

    pub fn get(&self, outcome: Outcome) -> u64 {
        self.counter(outcome).load(Ordering::Relaxed)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.process_start.elapsed().as_secs()
    }

    /// Renders the plain-text `/statusz` report.
    ///
    /// ```text
    /// uptime: 42
    /// hosts: 3
    /// index: 10
    /// caught: 7
    /// ignored: 1
    /// client-init: 4
    /// ```
    pub fn render(&self, hosts: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "uptime: {}", self.uptime_secs());
        let _ = writeln!(out, "hosts: {hosts}");
        for outcome in [
            Outcome::Index,
            Outcome::Caught,
            Outcome::Ignored,
            Outcome::ClientInit,
        ] {
            let _ = writeln!(out, "{}: {}", outcome.label(), self.get(outcome));
        }
        out
    }
}
