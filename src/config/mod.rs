//! Settings system
//!
//! Handles TOML settings file parsing and CLI argument merging. Mute levels
//! are not settings; they live in the store (see [`crate::store`]).

pub mod builder;
pub mod file;

pub use builder::SettingsBuilder;
pub use file::SettingsFile;

use crate::alerts::{BrowserCommand, SpeechCommand, Voice, VoiceGender};
use crate::services::monitor::{MonitorConfig, DEFAULT_REMEDIAL_URL, SAMPLE_INTERVAL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the mute store
pub const STORE_FILE_NAME: &str = "config.json";

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// General settings
    pub general: GeneralSettings,
    /// Mute store location
    pub store: StoreSettings,
    /// Speech output
    pub speech: SpeechSettings,
    /// Browser launching
    pub browser: BrowserSettings,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable verbose logging
    pub verbose: bool,
    /// Greet and tell the uptime on start
    pub announce_startup: bool,
    /// Stop monitoring when a sample cannot be read
    pub abort_on_sampler_error: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            announce_startup: true,
            abort_on_sampler_error: false,
        }
    }
}

/// Mute store settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreSettings {
    /// Path to the store file
    pub path: Option<PathBuf>,
}

/// Speech settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Speak alerts
    pub enabled: bool,
    /// espeak-compatible program
    pub program: String,
    /// Default voice gender
    pub voice: VoiceGender,
    /// Default rate (-10 to 10)
    pub rate: i8,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "espeak-ng".to_string(),
            voice: VoiceGender::Male,
            rate: 0,
        }
    }
}

/// Browser settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Program used to open URLs (platform opener when unset)
    pub program: Option<String>,
    /// Page opened the first time the CPU maxes out
    pub remedial_url: String,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            program: None,
            remedial_url: DEFAULT_REMEDIAL_URL.to_string(),
        }
    }
}

impl Settings {
    /// Store path, falling back to the user config directory
    ///
    /// Uses the working directory when no config directory exists.
    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = &self.store.path {
            return path.clone();
        }
        dirs::config_dir()
            .map(|dir| dir.join("perfwatch").join(STORE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
    }

    /// Default speaking voice
    pub fn voice(&self) -> Voice {
        Voice::new(self.speech.voice, self.speech.rate)
    }

    /// Speech program, if speech is enabled
    pub fn speech_command(&self) -> Option<SpeechCommand> {
        self.speech
            .enabled
            .then(|| SpeechCommand::new(self.speech.program.clone()))
    }

    /// Browser opener
    pub fn browser_command(&self) -> BrowserCommand {
        match &self.browser.program {
            Some(program) => BrowserCommand::new(program.clone()),
            None => BrowserCommand::default(),
        }
    }

    /// Convert to the monitor configuration
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            interval: SAMPLE_INTERVAL,
            voice: self.voice(),
            remedial_url: self.browser.remedial_url.clone(),
            announce_startup: self.general.announce_startup,
            abort_on_sampler_error: self.general.abort_on_sampler_error,
        }
    }
}
