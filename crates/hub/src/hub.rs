// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Connected clients registry.
use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// A connected client identifier.
pub type ClientId = u64;

/// The registry of connected clients.
///
/// Each client registers an outbound channel on connect, frames pushed
/// with [broadcast](Hub::broadcast) are fanned out to every client
/// except the sender.
#[derive(Debug, Default)]
pub struct Hub {
    clients: RwLock<AHashMap<ClientId, mpsc::UnboundedSender<String>>>,
    next_id: AtomicU64,
}

impl Hub {
    /// Registers a new client.
    ///
    /// Returns the client id and the receiving end of its outbound
    /// channel.
    pub fn register(&self) -> (ClientId, mpsc::UnboundedReceiver<String>) {
        let client_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        self.clients.write().insert(client_id, tx);
        debug!("Registered client {client_id}");

        (client_id, rx)
    }

    /// Unregisters a client, dropping its outbound channel.
    pub fn unregister(&self, client_id: ClientId) {
        self.clients.write().remove(&client_id);
        debug!("Unregistered client {client_id}");
    }

    /// Sends a frame to every registered client except the sender.
    pub fn broadcast(&self, sender: ClientId, frame: &str) {
        let clients = self.clients.read();
        for (client_id, tx) in clients.iter() {
            if *client_id != sender {
                // A closed channel means the client is going away, its
                // connection task unregisters it.
                let _ = tx.send(frame.to_string());
            }
        }
    }

    /// Number of registered clients.
    pub fn count(&self) -> usize {
        self.clients.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_skips_sender() {
        let hub = Hub::default();
        let (id1, mut rx1) = hub.register();
        let (id2, mut rx2) = hub.register();
        let (_id3, mut rx3) = hub.register();
        assert_eq!(hub.count(), 3);

        hub.broadcast(id1, "hello");

        assert!(rx1.try_recv().is_err());
        assert_eq!(rx2.try_recv().unwrap(), "hello");
        assert_eq!(rx3.try_recv().unwrap(), "hello");

        hub.unregister(id2);
        assert_eq!(hub.count(), 2);

        hub.broadcast(id1, "again");
        assert!(rx2.try_recv().is_err());
        assert_eq!(rx3.try_recv().unwrap(), "again");
    }
}
