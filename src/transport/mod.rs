//! Transport Module
//!
//! Datagram plumbing underneath the client.
//!
//! ## Architecture
//! - `Connector` resolves an address and opens a transport
//! - `Transport` sends whole packets; nothing is ever read back
//! - `UdpConnector` / `UdpTransport` are the std `UdpSocket` implementation

mod udp;

use std::io;

use crate::config::Config;

pub use udp::{UdpConnector, UdpTransport};

/// An open datagram channel to the daemon
pub trait Transport {
    /// Send one complete packet
    fn send(&mut self, packet: &[u8]) -> io::Result<()>;

    /// Release the channel
    fn close(self) -> io::Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Opens transports for a client
pub trait Connector {
    type Transport: Transport;

    /// Resolve `config.address` and open a transport bound to it
    fn connect(&self, config: &Config) -> io::Result<Self::Transport>;
}
