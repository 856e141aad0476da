//! Shared client
//!
//! `GrowlClient` is single-owner. `SharedClient` puts it behind a mutex so
//! several threads can notify through one registration; calls are
//! serialized, one packet at a time.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::client::GrowlClient;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Notification, Priority};
use crate::transport::{Connector, UdpConnector};

/// Cloneable, thread-safe handle to one client
pub struct SharedClient<C: Connector = UdpConnector> {
    inner: Arc<Mutex<GrowlClient<C>>>,
}

impl SharedClient<UdpConnector> {
    pub fn new(config: Config) -> Self {
        Self::from_client(GrowlClient::new(config))
    }
}

impl<C: Connector> SharedClient<C> {
    pub fn from_client(client: GrowlClient<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    pub fn register(&self) -> Result<()> {
        self.inner.lock().register()
    }

    pub fn notify(
        &self,
        name: &str,
        title: &str,
        description: &str,
        priority: Priority,
        sticky: bool,
    ) -> Result<()> {
        self.inner
            .lock()
            .notify(name, title, description, priority, sticky)
    }

    pub fn send(&self, notification: &Notification) -> Result<()> {
        self.inner.lock().send(notification)
    }

    pub fn close(&self) -> Result<()> {
        self.inner.lock().close()
    }

    pub fn is_registered(&self) -> bool {
        self.inner.lock().is_registered()
    }
}

impl<C: Connector> Clone for SharedClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
