//! Integration tests for netgrowl
//!
//! Drives the UDP client against a loopback socket standing in for the daemon.

use std::net::UdpSocket;
use std::time::Duration;

use netgrowl::protocol::{checksum, notification_flags, PacketType, PROTOCOL_VERSION};
use netgrowl::transport::{Connector, Transport, UdpConnector};
use netgrowl::{Config, GrowlClient, NetGrowlError, Priority, SharedClient};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_daemon() -> (UdpSocket, String) {
    let daemon = UdpSocket::bind("127.0.0.1:0").unwrap();
    daemon
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let addr = daemon.local_addr().unwrap().to_string();
    (daemon, addr)
}

fn recv_packet(daemon: &UdpSocket) -> Vec<u8> {
    let mut buf = [0u8; 65_536];
    let len = daemon.recv(&mut buf).unwrap();
    buf[..len].to_vec()
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[test]
fn test_register_and_notify_over_udp() {
    let (daemon, addr) = setup_daemon();
    let config = Config::builder()
        .address(&addr)
        .application("netgrowl")
        .notification("NetGrowl example notification")
        .password("password")
        .build();

    let mut growl = GrowlClient::new(config);
    growl.register().unwrap();
    growl
        .notify(
            "NetGrowl example notification",
            "Hello",
            "...world!",
            Priority::Normal,
            false,
        )
        .unwrap();

    let registration = recv_packet(&daemon);
    assert_eq!(registration[0], PROTOCOL_VERSION);
    assert_eq!(registration[1], PacketType::Registration as u8);
    assert_eq!(registration[4], 1);
    assert_eq!(registration[5], 1);
    assert!(checksum::verify(&registration, b"password"));

    let notification = recv_packet(&daemon);
    assert_eq!(notification[0], PROTOCOL_VERSION);
    assert_eq!(notification[1], PacketType::Notification as u8);
    assert_eq!(notification[2], 0);
    assert!(checksum::verify(&notification, b"password"));
    assert!(notification
        .windows(b"...world!".len())
        .any(|w| w == b"...world!"));

    growl.close().unwrap();
    assert!(!growl.is_registered());
}

#[test]
fn test_notification_flags_on_the_wire() {
    let (daemon, addr) = setup_daemon();
    let config = Config::builder().address(&addr).application("App").build();

    let mut growl = GrowlClient::new(config);
    growl.register().unwrap();
    let _ = recv_packet(&daemon);

    growl
        .notify("kind", "t", "d", Priority::VeryLow, true)
        .unwrap();
    let packet = recv_packet(&daemon);

    assert_eq!(packet[2] as u16, notification_flags(-2, true));
    assert_eq!(packet[3], 0);
    assert!(checksum::verify(&packet, b""));
}

#[test]
fn test_shared_client_over_udp() {
    let (daemon, addr) = setup_daemon();
    let shared = SharedClient::new(
        Config::builder()
            .address(&addr)
            .application("App")
            .notification("tick")
            .write_timeout_ms(1000)
            .build(),
    );

    shared.register().unwrap();
    shared
        .notify("tick", "t", "d", Priority::Emergency, false)
        .unwrap();

    let _ = recv_packet(&daemon);
    let packet = recv_packet(&daemon);
    assert_eq!(packet[2], 0x04);

    shared.close().unwrap();
}

#[test]
fn test_udp_transport_reports_addresses() {
    let (daemon, addr) = setup_daemon();
    let config = Config::builder().address(&addr).build();

    let mut transport = UdpConnector.connect(&config).unwrap();
    assert_eq!(transport.peer_addr(), daemon.local_addr().unwrap());
    assert_ne!(transport.local_addr().unwrap().port(), 0);

    transport.send(b"raw").unwrap();
    assert_eq!(recv_packet(&daemon), b"raw");
    transport.close().unwrap();
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_register_unresolvable_address() {
    let config = Config::builder()
        .address("this host does not parse")
        .application("App")
        .build();

    let mut growl = GrowlClient::new(config);
    let err = growl.register().unwrap_err();
    assert!(matches!(err, NetGrowlError::Transport(_)));
    assert!(!growl.is_registered());
}

#[test]
fn test_register_empty_address() {
    let config = Config::builder().address("").application("App").build();
    let mut growl = GrowlClient::new(config);
    assert!(matches!(growl.register(), Err(NetGrowlError::Config(_))));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.address, netgrowl::DEFAULT_ADDRESS);
    assert_eq!(config.address, "localhost:9887");
    assert!(config.password.is_empty());
    assert!(config.notifications.is_empty());
    assert!(config.validate().is_ok());
}
