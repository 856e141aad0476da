//! Error types for netgrowl
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

/// Result type alias using NetGrowlError
pub type Result<T> = std::result::Result<T, NetGrowlError>;

/// Unified error type for netgrowl operations
#[derive(Debug, Error)]
pub enum NetGrowlError {
    // -------------------------------------------------------------------------
    // State Machine Errors
    // -------------------------------------------------------------------------
    #[error("Already registered")]
    AlreadyRegistered,

    #[error("Not registered")]
    NotRegistered,

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Address resolution, socket open, send or close failure
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    /// A string does not fit its 16-bit length field
    #[error("Field `{field}` too long: {len} bytes (max 65535)")]
    FieldTooLong { field: &'static str, len: usize },

    /// The catalog does not fit the 8-bit count fields
    #[error("Too many notifications: {0} (max 255)")]
    TooManyNotifications(usize),

    #[error("Invalid priority: {0} (expected -2..=2)")]
    InvalidPriority(i64),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NetGrowlError {
    /// Returns true for errors raised by the socket layer
    pub fn is_transport(&self) -> bool {
        matches!(self, NetGrowlError::Transport(_))
    }
}
