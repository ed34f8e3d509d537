//! Host metric domain types
//!
//! Provides validated types for a single sampling tick.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::uptime::Uptime;

/// Whole-percent processor load (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CpuLoad(u8);

impl CpuLoad {
    /// Maximum valid load
    pub const MAX: u8 = 100;

    /// Create a new CpuLoad with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCpuLoad` if value > 100
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidCpuLoad(value));
        }
        Ok(Self(value))
    }

    /// Convert a fractional percentage, truncating and clamping into range
    pub fn from_percent(value: f32) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.clamp(0.0, f32::from(Self::MAX)) as u8)
    }

    /// Get the load as a percentage value (0-100)
    #[inline]
    pub const fn as_percentage(&self) -> u8 {
        self.0
    }

    /// Whether the processor is fully loaded
    #[inline]
    pub const fn is_maxed_out(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl fmt::Display for CpuLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for CpuLoad {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CpuLoad> for u8 {
    fn from(load: CpuLoad) -> Self {
        load.0
    }
}

/// One reading of every monitored metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub cpu_load: CpuLoad,
    pub available_memory_mb: u64,
    pub uptime: Uptime,
}

impl Sample {
    pub fn new(cpu_load: CpuLoad, available_memory_mb: u64, uptime: Duration) -> Self {
        Self {
            cpu_load,
            available_memory_mb,
            uptime: Uptime::from(uptime),
        }
    }

    /// Status line published every tick
    pub fn status_line(&self) -> String {
        format!(
            "CPU Load: {}%, Memory Available: {} MB",
            self.cpu_load.as_percentage(),
            self.available_memory_mb
        )
    }
}
