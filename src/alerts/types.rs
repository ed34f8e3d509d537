//! Alert type definitions
//!
//! Core types for channels, edge detection and delivery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An independently alerted metric stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Processor load
    Cpu,
    /// Available memory
    Memory,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: "channel".to_string(),
                message: format!("unknown channel '{}'", s),
            }),
        }
    }
}

/// What to do with an alert message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Show the message and speak it
    ShowAndSpeak,
    /// Show the message without speech
    ShowSilently,
    /// Drop the message
    Suppress,
}

/// Transition reported by [`ChannelState::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Metric just entered its alert range
    Rising,
    /// Metric is still in its alert range and has already alerted
    Holding,
    /// Metric just left its alert range
    Falling,
    /// Metric is in its normal range
    Quiet,
}

/// Debounce state for one channel
///
/// `armed` means an alert already fired for the current excursion. It is only
/// cleared when the metric returns to its normal range.
#[derive(Debug, Clone, Default)]
pub struct ChannelState {
    armed: bool,
    last_message: Option<String>,
}

impl ChannelState {
    /// Create a disarmed channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed whether the latest sample is in the alert range
    ///
    /// Arms on the first in-range sample and disarms on the first
    /// out-of-range one.
    pub fn observe(&mut self, in_alert_range: bool) -> Edge {
        match (in_alert_range, self.armed) {
            (true, false) => {
                self.armed = true;
                Edge::Rising
            }
            (true, true) => Edge::Holding,
            (false, true) => {
                self.armed = false;
                Edge::Falling
            }
            (false, false) => Edge::Quiet,
        }
    }

    /// Whether an alert already fired for the current excursion
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Remember the last message produced for this channel
    pub fn set_last_message(&mut self, message: impl Into<String>) {
        self.last_message = Some(message.into());
    }

    /// The last message produced for this channel, delivered or not
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}

/// Indicator shown by the notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    #[default]
    Normal,
    Alert,
}

impl VisualState {
    /// Alert when any channel is in range
    pub fn from_alert(alert: bool) -> Self {
        if alert {
            Self::Alert
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

/// Speaker voice gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    #[default]
    Male,
    Female,
}

impl VoiceGender {
    /// The other gender
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

/// Voice used for a single spoken message
///
/// `rate` follows the usual synthesizer scale of -10 (slowest) to 10
/// (fastest) with 0 as normal speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Voice {
    pub gender: VoiceGender,
    pub rate: i8,
}

impl Voice {
    /// Rate used for max-tier CPU alerts
    pub const URGENT_RATE: i8 = 2;

    /// Create a voice, clamping the rate into range
    pub fn new(gender: VoiceGender, rate: i8) -> Self {
        Self {
            gender,
            rate: rate.clamp(-10, 10),
        }
    }

    /// Opposite gender at the urgent rate
    pub fn urgent(self) -> Self {
        Self::new(self.gender.opposite(), Self::URGENT_RATE)
    }
}
