//! sysinfo-backed sampler

use super::traits::Sampler;
use crate::domain::CpuLoad;
use crate::error::SamplerError;
use std::time::Duration;
use sysinfo::System;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Samples the local host through sysinfo
pub struct SystemSampler {
    system: System,
}

impl SystemSampler {
    /// Create a sampler and prime the CPU counters
    ///
    /// CPU usage is computed between two refreshes, so the first reading
    /// after construction already covers a real interval.
    pub fn new() -> Result<Self, SamplerError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SamplerError::Unsupported);
        }

        let mut system = System::new();
        system.refresh_cpu();
        system.refresh_memory();
        log::debug!("Sampler initialized ({} CPUs)", system.cpus().len());

        Ok(Self { system })
    }
}

impl Sampler for SystemSampler {
    fn cpu_load_percent(&mut self) -> Result<CpuLoad, SamplerError> {
        self.system.refresh_cpu();
        let usage = self.system.global_cpu_info().cpu_usage();
        if !usage.is_finite() {
            return Err(SamplerError::ReadFailed {
                metric: "cpu load",
                message: format!("non-finite usage {}", usage),
            });
        }
        Ok(CpuLoad::from_percent(usage))
    }

    fn available_memory_mb(&mut self) -> Result<u64, SamplerError> {
        self.system.refresh_memory();
        if self.system.total_memory() == 0 {
            return Err(SamplerError::ReadFailed {
                metric: "available memory",
                message: "memory counters unavailable".to_string(),
            });
        }
        Ok(self.system.available_memory() / BYTES_PER_MB)
    }

    fn uptime(&mut self) -> Result<Duration, SamplerError> {
        Ok(Duration::from_secs(System::uptime()))
    }
}
