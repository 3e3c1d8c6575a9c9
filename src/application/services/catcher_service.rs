//! Registry of listened hosts and fan-out of caught requests.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::domain::caught_request::CaughtRequest;
use crate::utils::request_origin::host_without_port;

/// Buffered requests per host before a slow client starts lagging.
pub const HOST_CHANNEL_CAPACITY: usize = 128;

struct HostEntry {
    sender: broadcast::Sender<Arc<CaughtRequest>>,
    clients: usize,
}

type Hosts = Arc<Mutex<HashMap<String, HostEntry>>>;

/// Tracks which hosts have connected clients and broadcasts caught requests to them.
///
/// A host exists in the registry only while at least one [`Subscription`] for it
/// is alive. Requests to hosts without subscribers are not caught.
#[derive(Clone, Default)]
pub struct CatcherService {
    hosts: Hosts,
}

impl CatcherService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client for `host` (port ignored).
    pub fn subscribe(&self, host: &str) -> Subscription {
        let host = host_without_port(host).to_string();
        let mut hosts = self.hosts.lock();

        let entry = hosts.entry(host.clone()).or_insert_with(|| HostEntry {
            sender: broadcast::channel(HOST_CHANNEL_CAPACITY).0,
            clients: 0,
        });
        entry.clients += 1;
        let receiver = entry.sender.subscribe();
        let count = hosts.len();
        drop(hosts);

        metrics::gauge!("catcher_hosts").set(count as f64);

        Subscription {
            host,
            receiver,
            hosts: self.hosts.clone(),
        }
    }

    /// Broadcasts `request` to every client of its host.
    ///
    /// Returns `false` when nobody listens on that host.
    pub fn catch(&self, request: CaughtRequest) -> bool {
        let host = host_without_port(&request.host).to_string();

        let sender = match self.hosts.lock().get(&host) {
            Some(entry) => entry.sender.clone(),
            None => return false,
        };

        sender.send(Arc::new(request)).is_ok()
    }

    /// Number of hosts with at least one client.
    pub fn host_count(&self) -> usize {
        self.hosts.lock().len()
    }

    /// Number of clients listening on `host` (port ignored).
    pub fn client_count(&self, host: &str) -> usize {
        self.hosts
            .lock()
            .get(host_without_port(host))
            .map_or(0, |entry| entry.clients)
    }
}

/// A client's interest in one host. Dropping it unregisters the client.
pub struct Subscription {
    host: String,
    receiver: broadcast::Receiver<Arc<CaughtRequest>>,
    hosts: Hosts,
}

impl Subscription {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Waits for the next caught request.
    pub async fn recv(&mut self) -> Result<Arc<CaughtRequest>, broadcast::error::RecvError> {
        self.receiver.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut hosts = self.hosts.lock();

        if let Some(entry) = hosts.get_mut(&self.host) {
            entry.clients = entry.clients.saturating_sub(1);
            if entry.clients == 0 {
                hosts.remove(&self.host);
            }
        }

        let count = hosts.len();
        drop(hosts);
        metrics::gauge!("catcher_hosts").set(count as f64);
    }
}
