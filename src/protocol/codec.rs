//! Protocol codec
//!
//! Builds the registration and notification packets.
//!
//! ## Registration Layout
//! - version (1), type = 0 (1), app_len (2), count (1), default_count (1)
//! - application name
//! - per catalog entry: name_len (2) + name
//! - per catalog entry: default index (1), after all names
//! - MD5 (16)
//!
//! ## Notification Layout
//! - version (1), type = 1 (1), flags (2, low byte first)
//! - name_len (2), title_len (2), description_len (2), app_len (2)
//! - name + title + description + application
//! - MD5 (16)
//!
//! Strings longer than `u16::MAX` bytes and catalogs with more than
//! `u8::MAX` entries are rejected rather than truncated.

use bytes::Bytes;

use crate::error::{NetGrowlError, Result};
use super::checksum::CHECKSUM_SIZE;
use super::{Notification, PacketType, PacketWriter, PROTOCOL_VERSION};

/// Registration header: version + type + app_len (2) + count + default_count
const REGISTRATION_HEADER_SIZE: usize = 6;

/// Notification header: version + type + flags (2) + four lengths (2 each)
const NOTIFICATION_HEADER_SIZE: usize = 12;

/// Sign marker set for negative priorities
const FLAG_NEGATIVE: u16 = 0x08;

const FLAG_STICKY: u16 = 0x01;

// =============================================================================
// Registration
// =============================================================================

/// Encode a registration packet
///
/// Every catalog entry is announced as enabled by default, so the default
/// count equals the catalog size and the index block lists `0..count`.
pub fn encode_registration<S: AsRef<str>>(
    application: &str,
    notifications: &[S],
    secret: &str,
) -> Result<Bytes> {
    let app_len = field_len("application", application)?;
    let count = u8::try_from(notifications.len())
        .map_err(|_| NetGrowlError::TooManyNotifications(notifications.len()))?;

    let mut writer = PacketWriter::with_capacity(registration_len(application, notifications));
    writer.put_u8(PROTOCOL_VERSION);
    writer.put_u8(PacketType::Registration as u8);
    writer.put_u16(app_len);
    writer.put_u8(count);
    writer.put_u8(count);
    writer.put_bytes(application.as_bytes());

    for name in notifications {
        let name = name.as_ref();
        writer.put_u16(field_len("notification", name)?);
        writer.put_bytes(name.as_bytes());
    }

    for index in 0..count {
        writer.put_u8(index);
    }

    Ok(writer.finish(secret.as_bytes()))
}

/// Total size of the registration packet, checksum included
pub fn registration_len<S: AsRef<str>>(application: &str, notifications: &[S]) -> usize {
    let entries: usize = notifications
        .iter()
        .map(|name| 2 + name.as_ref().len() + 1)
        .sum();
    REGISTRATION_HEADER_SIZE + application.len() + entries + CHECKSUM_SIZE
}

// =============================================================================
// Notification
// =============================================================================

/// Encode a notification packet for `application`
pub fn encode_notification(
    notification: &Notification,
    application: &str,
    secret: &str,
) -> Result<Bytes> {
    let name_len = field_len("name", &notification.name)?;
    let title_len = field_len("title", &notification.title)?;
    let description_len = field_len("description", &notification.description)?;
    let app_len = field_len("application", application)?;

    let mut writer = PacketWriter::with_capacity(notification_len(notification, application));
    writer.put_u8(PROTOCOL_VERSION);
    writer.put_u8(PacketType::Notification as u8);
    writer.put_flags(notification_flags(
        notification.priority.value(),
        notification.sticky,
    ));
    writer.put_u16(name_len);
    writer.put_u16(title_len);
    writer.put_u16(description_len);
    writer.put_u16(app_len);

    writer.put_bytes(notification.name.as_bytes());
    writer.put_bytes(notification.title.as_bytes());
    writer.put_bytes(notification.description.as_bytes());
    writer.put_bytes(application.as_bytes());

    Ok(writer.finish(secret.as_bytes()))
}

/// Total size of the notification packet, checksum included
pub fn notification_len(notification: &Notification, application: &str) -> usize {
    NOTIFICATION_HEADER_SIZE
        + notification.name.len()
        + notification.title.len()
        + notification.description.len()
        + application.len()
        + CHECKSUM_SIZE
}

/// Flags field of a notification packet
///
/// `(priority & 0x07) << 1`, plus 0x08 for a negative priority and 0x01
/// for sticky.
pub fn notification_flags(priority: i8, sticky: bool) -> u16 {
    let mut flags = ((priority & 0x07) as u16) << 1;
    if priority < 0 {
        flags |= FLAG_NEGATIVE;
    }
    if sticky {
        flags |= FLAG_STICKY;
    }
    flags
}

// =============================================================================
// Helpers
// =============================================================================

/// Byte length of a string as its 16-bit length field
fn field_len(field: &'static str, value: &str) -> Result<u16> {
    u16::try_from(value.len()).map_err(|_| NetGrowlError::FieldTooLong {
        field,
        len: value.len(),
    })
}
