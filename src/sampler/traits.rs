//! Trait definitions for metric sampling
//!
//! These traits abstract over the host metrics backend to enable testing
//! with mocks.

use crate::domain::{CpuLoad, Sample};
use crate::error::SamplerError;
use std::time::Duration;

/// Source of host performance metrics
///
/// Each call returns an instantaneous reading. Implementations may need to
/// refresh internal counters, hence `&mut self`.
pub trait Sampler: Send {
    /// Current processor load across all cores
    fn cpu_load_percent(&mut self) -> Result<CpuLoad, SamplerError>;

    /// Memory available to new processes, in megabytes
    fn available_memory_mb(&mut self) -> Result<u64, SamplerError>;

    /// Time since boot
    fn uptime(&mut self) -> Result<Duration, SamplerError>;

    /// Read every metric for one tick
    fn sample(&mut self) -> Result<Sample, SamplerError> {
        let cpu_load = self.cpu_load_percent()?;
        let available_memory_mb = self.available_memory_mb()?;
        let uptime = self.uptime()?;
        Ok(Sample::new(cpu_load, available_memory_mb, uptime))
    }
}
