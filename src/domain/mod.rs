//! Domain models for perfwatch
//!
//! This module contains the metric types produced by a sampler.
//! Types are validated on construction (fail-fast pattern).

pub mod metrics;
pub mod uptime;

pub use metrics::{CpuLoad, Sample};
pub use uptime::Uptime;
