//! Packet definitions
//!
//! Header constants shared by both packet kinds.

/// Protocol version written as the first byte of every packet
pub const PROTOCOL_VERSION: u8 = 1;

/// Packet types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketType {
    Registration = 0x00,
    Notification = 0x01,
}
