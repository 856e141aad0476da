//! Configuration for netgrowl
//!
//! Identity of the client (daemon address, application, catalog, secret)
//! plus socket tuning. Fixed once the client is built.

use crate::error::{NetGrowlError, Result};

/// Address of a daemon running on the local machine
pub const DEFAULT_ADDRESS: &str = "localhost:9887";

/// Main configuration for a netgrowl client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Daemon Configuration
    // -------------------------------------------------------------------------
    /// Daemon address (host:port)
    pub address: String,

    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Application Identity
    // -------------------------------------------------------------------------
    /// Application name announced at registration
    pub application: String,

    /// Notification kinds, in registration order.
    /// The position of each entry is its default-notification index.
    pub notifications: Vec<String>,

    /// Shared secret mixed into the checksum (empty = no authentication)
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            write_timeout_ms: 0,
            application: "netgrowl".to_string(),
            notifications: Vec::new(),
            password: String::new(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the fields the protocol cannot do without
    pub fn validate(&self) -> Result<()> {
        if self.address.is_empty() {
            return Err(NetGrowlError::Config("daemon address is empty".to_string()));
        }
        if self.application.is_empty() {
            return Err(NetGrowlError::Config(
                "application name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the daemon address (host:port)
    pub fn address(mut self, addr: impl Into<String>) -> Self {
        self.config.address = addr.into();
        self
    }

    /// Set the socket write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the application name
    pub fn application(mut self, name: impl Into<String>) -> Self {
        self.config.application = name.into();
        self
    }

    /// Append one notification kind to the catalog
    pub fn notification(mut self, name: impl Into<String>) -> Self {
        self.config.notifications.push(name.into());
        self
    }

    /// Replace the whole notification catalog
    pub fn notifications<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.notifications = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the shared secret
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
