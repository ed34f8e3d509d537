//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::alerts::{Channel, MuteLevel};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Host performance monitor
///
/// Samples CPU load and available memory every second and raises debounced
/// alerts with per-channel mute levels.
#[derive(Parser, Debug)]
#[command(name = "perfwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to settings file
    #[arg(short, long, global = true, env = "PERFWATCH_CONFIG")]
    pub config: Option<String>,

    /// Path to the mute store file
    #[arg(long, global = true, env = "PERFWATCH_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start monitoring with an interactive console
    Run(RunArgs),

    /// Show the stored mute levels
    Show,

    /// Set and persist a channel's mute level
    Mute {
        /// Channel to change
        #[arg(value_enum)]
        channel: ChannelArg,

        /// New mute level
        #[arg(value_enum)]
        level: MuteLevelArg,
    },

    /// Take one sample and print it
    Sample,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Do not speak alerts
    #[arg(long)]
    pub no_speech: bool,

    /// Skip the greeting and uptime announcement
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop monitoring when a sample cannot be read
    #[arg(long)]
    pub abort_on_sampler_error: bool,
}

/// Channel argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelArg {
    /// CPU load alerts
    Cpu,
    /// Available memory alerts
    Memory,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Cpu => Channel::Cpu,
            ChannelArg::Memory => Channel::Memory,
        }
    }
}

/// Mute level argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteLevelArg {
    /// Show and speak alerts
    None,
    /// Show alerts without speech
    Voice,
    /// Suppress alerts entirely
    Full,
}

impl From<MuteLevelArg> for MuteLevel {
    fn from(arg: MuteLevelArg) -> Self {
        match arg {
            MuteLevelArg::None => MuteLevel::None,
            MuteLevelArg::Voice => MuteLevel::Voice,
            MuteLevelArg::Full => MuteLevel::Full,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
