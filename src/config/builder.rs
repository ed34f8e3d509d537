//! Settings builder
//!
//! Merges settings from files and CLI arguments.

use crate::config::{Settings, SettingsFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging settings sources
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Load settings from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and defaults are kept if none is found.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_settings = match path {
            Some(path) => Some(SettingsFile::load(path)?),
            None => SettingsFile::load_default(),
        };

        if let Some(settings) = file_settings {
            self.settings = settings;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.settings.general.verbose = v;
        }
        self
    }

    /// Override with CLI store path
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.settings.store.path = Some(p);
        }
        self
    }

    /// Override speech on/off
    pub fn with_speech(mut self, enabled: Option<bool>) -> Self {
        if let Some(e) = enabled {
            self.settings.speech.enabled = e;
        }
        self
    }

    /// Override startup announcements
    pub fn with_announce_startup(mut self, announce: Option<bool>) -> Self {
        if let Some(a) = announce {
            self.settings.general.announce_startup = a;
        }
        self
    }

    /// Override the sampler failure policy
    pub fn with_abort_on_sampler_error(mut self, abort: Option<bool>) -> Self {
        if let Some(a) = abort {
            self.settings.general.abort_on_sampler_error = a;
        }
        self
    }

    /// Build the final settings
    pub fn build(self) -> Settings {
        self.settings
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
