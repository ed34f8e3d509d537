//! Alert mute configuration
//!
//! Typed view over the [`ConfigStore`] holding one mute level per channel.
//! Levels live in atomics so the console can change them while the monitor
//! thread reads them.

use super::types::{Channel, Delivery};
use crate::error::{ConfigError, StoreError};
use crate::store::ConfigStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Store key for the memory channel mute level
pub const MUTE_MEM_ALERT_KEY: &str = "MuteMemAlert";
/// Store key for the CPU channel mute level
pub const MUTE_CPU_ALERT_KEY: &str = "MuteCpuAlert";

/// How much of an alert message is suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MuteLevel {
    /// Show and speak
    #[default]
    None = 0,
    /// Show without speaking
    Voice = 1,
    /// Deliver nothing
    Full = 255,
}

impl MuteLevel {
    /// Name used in the store file
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Voice => "Voice",
            Self::Full => "Full",
        }
    }

    /// How a message is delivered under this level
    pub const fn delivery(self) -> Delivery {
        match self {
            Self::None => Delivery::ShowAndSpeak,
            Self::Voice => Delivery::ShowSilently,
            Self::Full => Delivery::Suppress,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Voice,
            255 => Self::Full,
            _ => Self::None,
        }
    }
}

impl fmt::Display for MuteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuteLevel {
    type Err = ConfigError;

    /// Accepts the stored names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "voice" => Ok(Self::Voice),
            "full" => Ok(Self::Full),
            _ => Err(ConfigError::InvalidValue {
                key: "mute level".to_string(),
                message: format!("unknown mute level '{}'", s),
            }),
        }
    }
}

/// Per-channel mute levels shared between the console and the monitor
#[derive(Debug, Default)]
pub struct AlertConfig {
    memory_mute: AtomicU8,
    cpu_mute: AtomicU8,
}

impl AlertConfig {
    /// Create a config with explicit levels
    pub fn new(memory_mute: MuteLevel, cpu_mute: MuteLevel) -> Self {
        Self {
            memory_mute: AtomicU8::new(memory_mute as u8),
            cpu_mute: AtomicU8::new(cpu_mute as u8),
        }
    }

    /// Read both levels from the store
    ///
    /// Missing entries are seeded with `None`. Values that do not parse are
    /// logged and treated as `None`; loading never fails.
    pub fn load(store: &mut ConfigStore) -> Self {
        let memory_mute = Self::load_level(store, MUTE_MEM_ALERT_KEY);
        let cpu_mute = Self::load_level(store, MUTE_CPU_ALERT_KEY);
        log::info!(
            "Loaded mute levels: memory={}, cpu={}",
            memory_mute,
            cpu_mute
        );
        Self::new(memory_mute, cpu_mute)
    }

    fn load_level(store: &mut ConfigStore, key: &str) -> MuteLevel {
        let Some(raw) = store.get(key) else {
            store.put(key, MuteLevel::None.as_str());
            return MuteLevel::None;
        };

        match raw.parse() {
            Ok(level) => level,
            Err(e) => {
                log::warn!("Stored value for {} is invalid ({}), using None", key, e);
                MuteLevel::None
            }
        }
    }

    /// Write both levels to the store and flush it
    pub fn save(&self, store: &mut ConfigStore) -> Result<(), StoreError> {
        store.put(MUTE_MEM_ALERT_KEY, self.memory_mute().as_str());
        store.put(MUTE_CPU_ALERT_KEY, self.cpu_mute().as_str());
        store.flush()?;
        log::info!("Saved mute levels to {}", store.path().display());
        Ok(())
    }

    /// Current memory channel level
    pub fn memory_mute(&self) -> MuteLevel {
        MuteLevel::from_u8(self.memory_mute.load(Ordering::Relaxed))
    }

    /// Current CPU channel level
    pub fn cpu_mute(&self) -> MuteLevel {
        MuteLevel::from_u8(self.cpu_mute.load(Ordering::Relaxed))
    }

    /// Change the memory channel level (in memory only)
    pub fn set_memory_mute(&self, level: MuteLevel) {
        self.memory_mute.store(level as u8, Ordering::Relaxed);
    }

    /// Change the CPU channel level (in memory only)
    pub fn set_cpu_mute(&self, level: MuteLevel) {
        self.cpu_mute.store(level as u8, Ordering::Relaxed);
    }

    /// Level for a channel
    pub fn mute_for(&self, channel: Channel) -> MuteLevel {
        match channel {
            Channel::Cpu => self.cpu_mute(),
            Channel::Memory => self.memory_mute(),
        }
    }

    /// Set the level for a channel
    pub fn set_mute_for(&self, channel: Channel, level: MuteLevel) {
        match channel {
            Channel::Cpu => self.set_cpu_mute(level),
            Channel::Memory => self.set_memory_mute(level),
        }
    }
}
