//! Protocol Module
//!
//! Encodes the packets of the Growl UDP network protocol (version 1).
//! Packets are fire-and-forget datagrams; the daemon never answers.
//!
//! ## Registration Packet
//! ```text
//! ┌─────────┬─────────┬──────────────┬───────────┬──────────────┐
//! │ Ver (1) │ Type(1) │ App Len (2)  │ Count (1) │ Defaults (1) │
//! ├─────────┴─────────┴──────────────┴───────────┴──────────────┤
//! │ Application name                                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │ Per notification: Name Len (2) + Name                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │ Per notification: Default Index (1)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │ MD5 (16)                                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notification Packet
//! ```text
//! ┌─────────┬─────────┬───────────┬──────────┬───────────┬──────────┬─────────┐
//! │ Ver (1) │ Type(1) │ Flags (2) │ Name (2) │ Title (2) │ Desc (2) │ App (2) │
//! ├─────────┴─────────┴───────────┴──────────┴───────────┴──────────┴─────────┤
//! │ Name + Title + Description + Application                                  │
//! ├───────────────────────────────────────────────────────────────────────────┤
//! │ MD5 (16)                                                                  │
//! └───────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian except the flags field, which is written
//! low byte first.

mod packet;
mod priority;
mod notification;
mod writer;
mod codec;
pub mod checksum;

pub use packet::{PacketType, PROTOCOL_VERSION};
pub use priority::Priority;
pub use notification::Notification;
pub use writer::PacketWriter;
pub use checksum::CHECKSUM_SIZE;
pub use codec::{
    encode_registration, encode_notification, notification_flags,
    registration_len, notification_len,
};
