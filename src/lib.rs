//! # netgrowl
//!
//! Client for the Growl UDP network notification protocol (version 1):
//! - Registration of an application and its catalog of notification kinds
//! - Fire-and-forget notifications with priority and sticky flag
//! - MD5 checksum suffix, optionally keyed with a shared secret
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 GrowlClient / SharedClient                  │
//! │          (Unregistered ⇄ Registered { transport })          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │  (Encoder)  │          │    (UDP)    │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │PacketWriter │
//!   │  + MD5 sum  │
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use netgrowl::{Config, GrowlClient, Priority};
//!
//! let config = Config::builder()
//!     .application("netgrowl")
//!     .notification("NetGrowl example notification")
//!     .password("password")
//!     .build();
//!
//! let mut growl = GrowlClient::new(config);
//! growl.register()?;
//! growl.notify(
//!     "NetGrowl example notification",
//!     "Hello",
//!     "...world!",
//!     Priority::Normal,
//!     false,
//! )?;
//! growl.close()?;
//! # Ok::<(), netgrowl::NetGrowlError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod client;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NetGrowlError, Result};
pub use config::{Config, DEFAULT_ADDRESS};
pub use protocol::{Notification, Priority};
pub use client::{ClientState, GrowlClient};
pub use shared::SharedClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of netgrowl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
