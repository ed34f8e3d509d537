//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod console;
pub mod output;

pub use args::{Cli, Commands};
pub use console::ConsoleCommand;
