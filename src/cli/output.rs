//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::{AlertConfig, MuteLevel};
use crate::cli::args::OutputFormat;
use crate::domain::Sample;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Mute levels for display
#[derive(Debug, Clone, Serialize)]
pub struct MuteStatus {
    pub store: String,
    pub memory: MuteLevel,
    pub cpu: MuteLevel,
}

impl MuteStatus {
    pub fn new(store: impl Into<String>, config: &AlertConfig) -> Self {
        Self {
            store: store.into(),
            memory: config.memory_mute(),
            cpu: config.cpu_mute(),
        }
    }
}

impl TableDisplay for MuteStatus {
    fn to_table(&self) -> String {
        format!(
            "Store: {}\n  Memory alert mute: {}\n  CPU alert mute:    {}",
            self.store, self.memory, self.cpu
        )
    }

    fn to_compact(&self) -> String {
        format!("memory={} cpu={}", self.memory, self.cpu)
    }
}

impl TableDisplay for Sample {
    fn to_table(&self) -> String {
        format!("{}\n{}", self.status_line(), self.uptime)
    }

    fn to_compact(&self) -> String {
        format!(
            "cpu={}% mem={}MB uptime={}s",
            self.cpu_load.as_percentage(),
            self.available_memory_mb,
            self.uptime.as_duration().as_secs()
        )
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
