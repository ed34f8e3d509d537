//! Service layer
//!
//! The alert monitor loop and the shutdown flag that stops it.

pub mod monitor;
pub mod shutdown;

pub use monitor::{AlertMonitor, MonitorConfig, TickOutcome};
pub use shutdown::Shutdown;
