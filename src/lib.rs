//! perfwatch - host performance monitor library
//!
//! This library samples CPU load and available memory once per second and
//! raises debounced alerts whose delivery is governed by persisted
//! per-channel mute levels.
//!
//! # Modules
//!
//! - [`alerts`]: Mute levels, alert state and notification channels
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Settings system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`sampler`]: Metric sampling abstraction
//! - [`services`]: Alert monitor and shutdown coordination
//! - [`store`]: Named-entry JSON store

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod sampler;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
