//! Show command implementation

use crate::alerts::AlertConfig;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, MuteStatus};
use crate::config::Settings;
use crate::error::Result;

use super::open_store;

/// Print the stored mute levels
pub fn run_show(settings: &Settings, format: OutputFormat) -> Result<()> {
    let path = settings.store_path();
    let mut store = open_store(&path)?;
    let alerts = AlertConfig::load(&mut store);

    let status = MuteStatus::new(path.display().to_string(), &alerts);
    print_output(&status, format)?;
    Ok(())
}
