//! Client Module
//!
//! Registration state machine in front of a transport.
//!
//! ## States
//! ```text
//!                 register()
//!   Unregistered ───────────► Registered { transport }
//!        ▲                          │
//!        └──────────────────────────┘
//!                 close()
//! ```
//!
//! `notify()` is only valid while registered and never changes state.

use crate::config::Config;
use crate::error::{NetGrowlError, Result};
use crate::protocol::{encode_notification, encode_registration, Notification, Priority};
use crate::transport::{Connector, Transport, UdpConnector};

/// Connection state; the transport exists exactly while registered
#[derive(Debug)]
pub enum ClientState<T> {
    Unregistered,
    Registered { transport: T },
}

/// Client for one application talking to one daemon
pub struct GrowlClient<C: Connector = UdpConnector> {
    /// Identity and socket settings, fixed at construction
    config: Config,

    /// Opens the transport on register
    connector: C,

    state: ClientState<C::Transport>,
}

impl GrowlClient<UdpConnector> {
    /// Create an unregistered client using UDP
    pub fn new(config: Config) -> Self {
        Self::with_connector(config, UdpConnector)
    }
}

impl<C: Connector> GrowlClient<C> {
    /// Create an unregistered client with a custom transport
    pub fn with_connector(config: Config, connector: C) -> Self {
        Self {
            config,
            connector,
            state: ClientState::Unregistered,
        }
    }

    /// Announce the application and its catalog to the daemon
    ///
    /// The packet is encoded before the transport is opened, so invalid
    /// input never reaches the network. If sending fails the new
    /// transport is dropped and the client stays unregistered.
    pub fn register(&mut self) -> Result<()> {
        if self.is_registered() {
            return Err(NetGrowlError::AlreadyRegistered);
        }

        self.config.validate()?;
        let packet = encode_registration(
            &self.config.application,
            self.config.notifications.as_slice(),
            &self.config.password,
        )?;

        let mut transport = self.connector.connect(&self.config).map_err(|e| {
            tracing::warn!("Failed to open transport to {}: {}", self.config.address, e);
            e
        })?;

        if let Err(e) = transport.send(&packet) {
            tracing::warn!("Failed to send registration to {}: {}", self.config.address, e);
            return Err(e.into());
        }

        tracing::debug!(
            "Registered `{}` with {} notification(s) at {} ({} bytes)",
            self.config.application,
            self.config.notifications.len(),
            self.config.address,
            packet.len()
        );

        self.state = ClientState::Registered { transport };
        Ok(())
    }

    /// Send one notification
    pub fn notify(
        &mut self,
        name: &str,
        title: &str,
        description: &str,
        priority: Priority,
        sticky: bool,
    ) -> Result<()> {
        let notification = Notification::new(name, title, description)
            .priority(priority)
            .sticky(sticky);
        self.send(&notification)
    }

    /// Send a prepared notification
    pub fn send(&mut self, notification: &Notification) -> Result<()> {
        let transport = match &mut self.state {
            ClientState::Registered { transport } => transport,
            ClientState::Unregistered => return Err(NetGrowlError::NotRegistered),
        };

        let packet = encode_notification(
            notification,
            &self.config.application,
            &self.config.password,
        )?;

        transport.send(&packet).map_err(|e| {
            tracing::warn!("Failed to send `{}` notification: {}", notification.name, e);
            NetGrowlError::from(e)
        })?;

        tracing::trace!(
            "Sent `{}` notification ({}, sticky={}, {} bytes)",
            notification.name,
            notification.priority,
            notification.sticky,
            packet.len()
        );
        Ok(())
    }

    /// Release the transport
    ///
    /// The client is unregistered afterwards even if closing reports an error.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, ClientState::Unregistered) {
            ClientState::Registered { transport } => {
                tracing::debug!("Closing connection to {}", self.config.address);
                transport.close()?;
                Ok(())
            }
            ClientState::Unregistered => Err(NetGrowlError::NotRegistered),
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self.state, ClientState::Registered { .. })
    }

    /// Current connection state
    pub fn state(&self) -> &ClientState<C::Transport> {
        &self.state
    }

    pub fn application(&self) -> &str {
        &self.config.application
    }

    /// Registered notification kinds, in index order
    pub fn notifications(&self) -> &[String] {
        &self.config.notifications
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<C: Connector> std::fmt::Debug for GrowlClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowlClient")
            .field("address", &self.config.address)
            .field("application", &self.config.application)
            .field("notifications", &self.config.notifications)
            .field("registered", &self.is_registered())
            .finish()
    }
}
