//! Packet writer
//!
//! Appends fixed-width integers and raw strings to a growing buffer.
//! Strings get no automatic length prefix; callers write the length
//! field themselves before the bytes it describes.

use bytes::{BufMut, Bytes, BytesMut};

use super::checksum::{self, CHECKSUM_SIZE};

/// In-memory packet builder
#[derive(Debug, Default)]
pub struct PacketWriter {
    buf: BytesMut,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer sized for a packet of `len` bytes (checksum included)
    pub fn with_capacity(len: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(len),
        }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Big-endian
    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    /// Raw bytes, no terminator
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Notification flags: the only field on the wire written low byte
    /// first. Only the low byte ever carries bits.
    pub fn put_flags(&mut self, flags: u16) {
        self.buf.put_u16_le(flags);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append the digest of everything written so far and freeze the packet
    pub fn finish(mut self, secret: &[u8]) -> Bytes {
        let digest = checksum::digest(&self.buf, secret);
        self.buf.reserve(CHECKSUM_SIZE);
        self.buf.put_slice(&digest);
        self.buf.freeze()
    }
}
