//! Alert and notification system
//!
//! Mute configuration, channel debounce state and notification output.

mod config;
mod notifier;
mod speech;
mod types;

pub use config::{AlertConfig, MuteLevel, MUTE_CPU_ALERT_KEY, MUTE_MEM_ALERT_KEY};
pub use notifier::{Notifier, StatusBoard, StatusSnapshot, TerminalNotifier};
pub use speech::{BrowserCommand, SpeechCommand};
pub use types::{Channel, ChannelState, Delivery, Edge, VisualState, Voice, VoiceGender};
