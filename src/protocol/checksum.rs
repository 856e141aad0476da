//! Packet checksum
//!
//! Every packet ends with `MD5(payload || secret)`, or `MD5(payload)` when
//! no secret is configured. This authenticates the sender; the payload
//! itself travels in clear text.

use md5::{Digest, Md5};

/// Size of the trailing digest
pub const CHECKSUM_SIZE: usize = 16;

/// Digest of `payload` followed by `secret` (skipped when empty)
pub fn digest(payload: &[u8], secret: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let mut hasher = Md5::new();
    hasher.update(payload);
    if !secret.is_empty() {
        hasher.update(secret);
    }

    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Recompute the trailing digest of a complete packet and compare
pub fn verify(packet: &[u8], secret: &[u8]) -> bool {
    if packet.len() < CHECKSUM_SIZE {
        return false;
    }
    let (payload, trailer) = packet.split_at(packet.len() - CHECKSUM_SIZE);
    digest(payload, secret).as_slice() == trailer
}
