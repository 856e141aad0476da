//! UDP transport
//!
//! Connected `UdpSocket` per registration.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use crate::config::Config;
use super::{Connector, Transport};

/// Opens connected UDP sockets
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpConnector;

impl Connector for UdpConnector {
    type Transport = UdpTransport;

    /// Tries each resolved address in turn and keeps the first socket
    /// that connects
    fn connect(&self, config: &Config) -> io::Result<UdpTransport> {
        let mut last_err = None;

        for addr in config.address.to_socket_addrs()? {
            match UdpTransport::connect(addr) {
                Ok(transport) => {
                    if config.write_timeout_ms > 0 {
                        transport
                            .socket
                            .set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
                    }
                    return Ok(transport);
                }
                Err(e) => {
                    tracing::debug!("Failed to open UDP socket to {}: {}", addr, e);
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("address `{}` did not resolve", config.address),
            )
        }))
    }
}

/// A UDP socket connected to the daemon
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,

    /// Daemon address for logging
    peer_addr: SocketAddr,
}

impl UdpTransport {
    /// Bind an ephemeral local socket of the same family and connect it
    pub fn connect(addr: SocketAddr) -> io::Result<Self> {
        let local: SocketAddr = match addr {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        let socket = UdpSocket::bind(local)?;
        socket.connect(addr)?;

        Ok(Self {
            socket,
            peer_addr: addr,
        })
    }

    /// Get the daemon address
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Get the local address the socket is bound to
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, packet: &[u8]) -> io::Result<()> {
        let sent = self.socket.send(packet)?;
        if sent != packet.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short datagram: sent {} of {} bytes", sent, packet.len()),
            ));
        }
        tracing::trace!("Sent {} bytes to {}", sent, self.peer_addr);
        Ok(())
    }

    /// The socket is closed when dropped
    fn close(self) -> io::Result<()> {
        tracing::trace!("Closing UDP socket to {}", self.peer_addr);
        drop(self.socket);
        Ok(())
    }
}
