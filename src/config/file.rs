//! Settings file loading
//!
//! Reads `perfwatch.toml` style files and rejects values the monitor cannot
//! use.

use crate::config::Settings;
use crate::error::ConfigError;

use std::io;
use std::path::{Path, PathBuf};

/// Accepted range for `speech.rate`
const RATE_RANGE: std::ops::RangeInclusive<i8> = -10..=10;

/// Settings file handler
pub struct SettingsFile;

impl SettingsFile {
    /// Load and validate settings from `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::InvalidValue {
                key: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let settings: Settings = toml::from_str(&content)?;
        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load the first usable file from the default locations
    pub fn load_default() -> Option<Settings> {
        Self::load_first(Self::default_paths())
    }

    /// Load the first existing file in `paths` that parses and validates
    ///
    /// Broken files are logged and skipped so a stale system-wide file does
    /// not hide a good user file.
    pub fn load_first<I>(paths: I) -> Option<Settings>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::load(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    Some(settings)
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
    }

    /// Search order; the first usable file wins
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/perfwatch/config.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("perfwatch").join("config.toml"));
        }
        paths.push(PathBuf::from("perfwatch.toml"));
        paths
    }

    fn validate(settings: &Settings) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        if !RATE_RANGE.contains(&settings.speech.rate) {
            return Err(invalid(
                "speech.rate",
                format!(
                    "{} is outside {}..={}",
                    settings.speech.rate,
                    RATE_RANGE.start(),
                    RATE_RANGE.end()
                ),
            ));
        }
        if settings.speech.enabled && settings.speech.program.trim().is_empty() {
            return Err(invalid(
                "speech.program",
                "must name a program when speech is enabled".to_string(),
            ));
        }
        if settings.browser.remedial_url.trim().is_empty() {
            return Err(invalid("browser.remedial_url", "must not be empty".to_string()));
        }
        if matches!(&settings.browser.program, Some(p) if p.trim().is_empty()) {
            return Err(invalid(
                "browser.program",
                "must not be empty; omit it to use the platform opener".to_string(),
            ));
        }
        Ok(())
    }
}
