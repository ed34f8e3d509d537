//! Sample command implementation

use crate::cli::args::OutputFormat;
use crate::cli::output::print_output;
use crate::error::Result;
use crate::sampler::{Sampler, SystemSampler};

/// Take one sample of the host and print it
pub fn run_sample(format: OutputFormat) -> Result<()> {
    let mut sampler = SystemSampler::new()?;

    // CPU usage needs two refreshes at least this far apart.
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    let sample = sampler.sample()?;
    print_output(&sample, format)?;
    Ok(())
}
