//! Unified error types for perfwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the persistent mute store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from settings parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the metric sampler
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// The monitor worker thread panicked
    #[error("Monitor thread terminated unexpectedly")]
    MonitorPanicked,

    /// Failed to install the shutdown signal handler
    #[error("Failed to set signal handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),

    /// IO error (terminal, thread spawn)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the named-entry store backing the mute levels
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be created, read, written or renamed
    #[error("Cannot access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory entries could not be serialized
    #[error("Failed to serialize store entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// CPU load outside 0-100
    #[error("Invalid CPU load: {0}% (must be 0-100)")]
    InvalidCpuLoad(u8),
}

/// Errors from settings parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid settings or stored value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from metric sampling
#[derive(Error, Debug)]
pub enum SamplerError {
    /// The host platform is not supported by the sampling backend
    #[error("Metric sampling is not supported on this platform")]
    Unsupported,

    /// A single metric read failed
    #[error("Failed to read {metric}: {message}")]
    ReadFailed {
        metric: &'static str,
        message: String,
    },
}

/// Errors from notification channels
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Speech program failed to start or exited unsuccessfully
    #[error("Speech output failed: {0}")]
    Speech(String),

    /// Browser could not be launched
    #[error("Failed to open browser: {0}")]
    Browser(String),

    /// Terminal write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
