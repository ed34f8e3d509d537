//! System uptime

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Time since boot, rendered as a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Uptime(Duration);

impl Uptime {
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Whole days
    pub fn days(&self) -> u64 {
        self.0.as_secs() / 86_400
    }

    /// Hours past the last whole day
    pub fn hours(&self) -> u64 {
        (self.0.as_secs() % 86_400) / 3600
    }

    /// Minutes past the last whole hour
    pub fn minutes(&self) -> u64 {
        (self.0.as_secs() % 3600) / 60
    }

    /// Seconds past the last whole minute
    pub fn seconds(&self) -> u64 {
        self.0.as_secs() % 60
    }
}

impl From<Duration> for Uptime {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "System is up for {} days, {} hours, {} minutes and {} seconds.",
            self.days(),
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl Serialize for Uptime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0.as_secs())
    }
}
