//! Notification definitions
//!
//! One concrete notification instance to be shown by the daemon.

use super::Priority;

/// A notification to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification kind; should be one of the registered catalog entries
    pub name: String,

    pub title: String,

    pub description: String,

    pub priority: Priority,

    /// Ask the daemon not to dismiss it automatically
    pub sticky: bool,
}

impl Notification {
    /// Create a normal-priority, non-sticky notification
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            priority: Priority::Normal,
            sticky: false,
        }
    }

    /// Set the priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the sticky flag
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}
