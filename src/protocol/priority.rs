//! Notification priority levels

use std::fmt;
use std::str::FromStr;

use crate::error::NetGrowlError;

/// Display priority requested for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Priority {
    VeryLow = -2,
    Moderate = -1,
    #[default]
    Normal = 0,
    High = 1,
    Emergency = 2,
}

impl Priority {
    /// All levels, lowest first
    pub const ALL: [Priority; 5] = [
        Priority::VeryLow,
        Priority::Moderate,
        Priority::Normal,
        Priority::High,
        Priority::Emergency,
    ];

    /// Signed wire value
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::VeryLow => "very-low",
            Priority::Moderate => "moderate",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Emergency => "emergency",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = NetGrowlError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Priority::VeryLow),
            -1 => Ok(Priority::Moderate),
            0 => Ok(Priority::Normal),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Emergency),
            _ => Err(NetGrowlError::InvalidPriority(value)),
        }
    }
}

impl FromStr for Priority {
    type Err = NetGrowlError;

    /// Accepts a level name (`very-low`, `moderate`, ...) or its integer value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(priority) = Priority::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
        {
            return Ok(priority);
        }
        match s.parse::<i64>() {
            Ok(value) => Priority::try_from(value),
            Err(_) => Err(NetGrowlError::Config(format!("unknown priority `{}`", s))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
