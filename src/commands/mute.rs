//! Mute command implementation
//!
//! Changes a stored mute level without starting the monitor.

use crate::alerts::{AlertConfig, Channel, MuteLevel};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, Message};
use crate::config::Settings;
use crate::error::Result;
use crate::store::ConfigStore;

use super::open_store;

/// Set and persist a channel's mute level
pub fn run_mute(
    settings: &Settings,
    channel: Channel,
    level: MuteLevel,
    format: OutputFormat,
) -> Result<()> {
    let mut store = open_store(&settings.store_path())?;
    set_mute(&mut store, channel, level)?;

    let msg = Message {
        message: format!("{} alert mute set to {}", channel, level),
        success: true,
    };
    print_output(&msg, format)?;
    Ok(())
}

fn set_mute(store: &mut ConfigStore, channel: Channel, level: MuteLevel) -> Result<()> {
    let alerts = AlertConfig::load(store);
    alerts.set_mute_for(channel, level);
    alerts.save(store)?;
    Ok(())
}
