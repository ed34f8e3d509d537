//! External programs used by the terminal notifier
//!
//! Speech goes through an espeak-compatible command line and URLs are handed
//! to the desktop's opener.

use super::types::{Voice, VoiceGender};
use crate::error::NotifyError;
use std::process::{Command, Stdio};
use std::thread;

/// Words per minute at rate 0
const BASE_WORDS_PER_MINUTE: i32 = 175;
/// Words per minute added per rate step
const WORDS_PER_RATE_STEP: i32 = 15;

/// Speech synthesizer invoked as a child process
#[derive(Debug, Clone)]
pub struct SpeechCommand {
    program: String,
}

impl SpeechCommand {
    /// Use `program` (e.g. `espeak-ng`) for speech
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed for a message spoken with `voice`
    pub fn args(&self, text: &str, voice: Voice) -> Vec<String> {
        let variant = match voice.gender {
            VoiceGender::Male => "en+m3",
            VoiceGender::Female => "en+f3",
        };
        vec![
            "-v".to_string(),
            variant.to_string(),
            "-s".to_string(),
            Self::words_per_minute(voice.rate).to_string(),
            text.to_string(),
        ]
    }

    fn words_per_minute(rate: i8) -> i32 {
        BASE_WORDS_PER_MINUTE + i32::from(rate) * WORDS_PER_RATE_STEP
    }

    /// Speak `text`, blocking until the utterance finishes
    pub fn speak(&self, text: &str, voice: Voice) -> Result<(), NotifyError> {
        let status = Command::new(&self.program)
            .args(self.args(text, voice))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NotifyError::Speech(format!("{}: {}", self.program, e)))?;

        if !status.success() {
            return Err(NotifyError::Speech(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Opens URLs in the user's browser
#[derive(Debug, Clone)]
pub struct BrowserCommand {
    program: String,
}

impl BrowserCommand {
    /// Use `program` to open URLs
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Platform opener program
    pub fn platform_default() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Launch the browser without waiting for it
    ///
    /// The child is reaped on a detached thread so it does not linger as a
    /// zombie once the opener exits.
    pub fn open(&self, url: &str) -> Result<(), NotifyError> {
        let mut child = Command::new(&self.program)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NotifyError::Browser(format!("{}: {}", self.program, e)))?;

        let program = self.program.clone();
        let reaper = thread::Builder::new()
            .name("browser-wait".to_string())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    log::warn!("{} exited with {}", program, status)
                }
                Ok(_) => {}
                Err(e) => log::warn!("Failed to wait for {}: {}", program, e),
            });
        if let Err(e) = reaper {
            log::warn!("Cannot reap {}: {}", self.program, e);
        }
        Ok(())
    }
}

impl Default for BrowserCommand {
    fn default() -> Self {
        Self::new(Self::platform_default())
    }
}
