//! Alert notification system
//!
//! The [`Notifier`] trait is everything the monitor needs from a user-facing
//! surface. [`TerminalNotifier`] renders it on the console.

use super::speech::{BrowserCommand, SpeechCommand};
use super::types::{VisualState, Voice};
use crate::error::NotifyError;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Output surface driven by the monitor
pub trait Notifier: Send {
    /// Replace the status line and uptime text
    fn set_status_text(&mut self, status: &str, uptime: &str) -> Result<(), NotifyError>;

    /// Show a one-shot message, speaking it with `voice` when given
    fn show_alert(&mut self, message: &str, voice: Option<Voice>) -> Result<(), NotifyError>;

    /// Switch the indicator between normal and alert
    fn set_visual_state(&mut self, state: VisualState) -> Result<(), NotifyError>;

    /// Open a URL in the user's browser
    fn open_url(&mut self, url: &str) -> Result<(), NotifyError>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Latest state published by a notifier
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusSnapshot {
    pub status: String,
    pub uptime: String,
    pub visual_state: VisualState,
}

/// Shared, readable copy of what the notifier last showed
///
/// The console reads it to answer `status` without touching the monitor.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    inner: Arc<Mutex<StatusSnapshot>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update<F: FnOnce(&mut StatusSnapshot)>(&self, f: F) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

/// Terminal/console notifier
///
/// Writes alerts to stderr with colored formatting, optionally speaks them and
/// keeps the status line on a [`StatusBoard`].
pub struct TerminalNotifier {
    board: StatusBoard,
    speech: Option<SpeechCommand>,
    browser: BrowserCommand,
    use_colors: bool,
    visual_state: VisualState,
}

impl TerminalNotifier {
    /// Create a new terminal notifier without speech
    pub fn new(board: StatusBoard) -> Self {
        Self {
            board,
            speech: None,
            browser: BrowserCommand::default(),
            use_colors: Self::supports_color(),
            visual_state: VisualState::Normal,
        }
    }

    /// Builder: speak messages through `speech`
    pub fn with_speech(mut self, speech: Option<SpeechCommand>) -> Self {
        self.speech = speech;
        self
    }

    /// Builder: open URLs with `browser`
    pub fn with_browser(mut self, browser: BrowserCommand) -> Self {
        self.browser = browser;
        self
    }

    /// Builder: disable ANSI colors
    pub fn no_color(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Check if terminal supports colors
    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    fn timestamp() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| {
                let secs = d.as_secs();
                let hours = (secs / 3600) % 24;
                let mins = (secs % 3600) / 60;
                let secs = secs % 60;
                format!("{:02}:{:02}:{:02}", hours, mins, secs)
            })
            .unwrap_or_else(|_| "??:??:??".to_string())
    }

    fn format_alert(&self, message: &str) -> String {
        let tag = if self.use_colors {
            "\x1b[33mALERT\x1b[0m"
        } else {
            "ALERT"
        };
        format!("[{}] {} {}", Self::timestamp(), tag, message)
    }

    fn format_visual_state(&self, state: VisualState) -> String {
        if !self.use_colors {
            return format!("Indicator: {}", state);
        }
        match state {
            VisualState::Normal => "Indicator: \x1b[32mnormal\x1b[0m".to_string(),
            VisualState::Alert => "Indicator: \x1b[31m\x1b[1malert\x1b[0m".to_string(),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn set_status_text(&mut self, status: &str, uptime: &str) -> Result<(), NotifyError> {
        log::debug!("{}", status);
        self.board.update(|s| {
            s.status = status.to_string();
            s.uptime = uptime.to_string();
        });
        Ok(())
    }

    fn show_alert(&mut self, message: &str, voice: Option<Voice>) -> Result<(), NotifyError> {
        let line = self.format_alert(message);
        {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", line)?;
        }

        match (voice, &self.speech) {
            (Some(voice), Some(speech)) => speech.speak(message, voice),
            _ => Ok(()),
        }
    }

    fn set_visual_state(&mut self, state: VisualState) -> Result<(), NotifyError> {
        self.board.update(|s| s.visual_state = state);
        if state == self.visual_state {
            return Ok(());
        }
        self.visual_state = state;
        log::info!("Visual state changed to {}", state);

        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{}", self.format_visual_state(state))?;
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<(), NotifyError> {
        log::info!("Opening {} with {}", url, self.browser.program());
        self.browser.open(url)
    }

    fn name(&self) -> &str {
        "terminal"
    }
}
