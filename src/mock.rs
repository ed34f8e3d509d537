//! Mock implementations for testing
//!
//! Provides a scripted sampler and a recording notifier so the monitor can be
//! driven without real hardware or a terminal.

use crate::alerts::{Notifier, VisualState, Voice};
use crate::domain::{CpuLoad, Sample};
use crate::error::{NotifyError, SamplerError};
use crate::sampler::Sampler;
use crate::services::Shutdown;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted sampler
///
/// Each call to [`Sampler::sample`] consumes one scripted reading. Once the
/// script runs out the sampler requests shutdown (if given a handle) and
/// reports a read failure.
#[derive(Debug)]
pub struct MockSampler {
    script: VecDeque<Option<(u8, u64)>>,
    cpu_load: CpuLoad,
    available_memory_mb: u64,
    uptime: Duration,
    stop_when_exhausted: Option<Shutdown>,
}

impl MockSampler {
    /// Create a mock sampler with idle defaults and an empty script
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            cpu_load: CpuLoad::new(10).unwrap(),
            available_memory_mb: 8192,
            uptime: Duration::from_secs(3600),
            stop_when_exhausted: None,
        }
    }

    /// Script CPU loads with plenty of memory
    pub fn with_cpu_script(loads: &[u8]) -> Self {
        let mut sampler = Self::new();
        for &load in loads {
            sampler.push(load, 8192);
        }
        sampler
    }

    /// Script available memory with an idle CPU
    pub fn with_memory_script(megabytes: &[u64]) -> Self {
        let mut sampler = Self::new();
        for &mb in megabytes {
            sampler.push(10, mb);
        }
        sampler
    }

    /// Append a reading
    pub fn push(&mut self, cpu_load: u8, available_memory_mb: u64) {
        self.script.push_back(Some((cpu_load, available_memory_mb)));
    }

    /// Append a failed reading
    pub fn push_failure(&mut self) {
        self.script.push_back(None);
    }

    /// Builder: request shutdown when the script is exhausted
    pub fn stop_when_exhausted(mut self, shutdown: Shutdown) -> Self {
        self.stop_when_exhausted = Some(shutdown);
        self
    }

    /// Builder: set the reported uptime
    pub fn with_uptime(mut self, uptime: Duration) -> Self {
        self.uptime = uptime;
        self
    }
}

impl Default for MockSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for MockSampler {
    fn cpu_load_percent(&mut self) -> Result<CpuLoad, SamplerError> {
        Ok(self.cpu_load)
    }

    fn available_memory_mb(&mut self) -> Result<u64, SamplerError> {
        Ok(self.available_memory_mb)
    }

    fn uptime(&mut self) -> Result<Duration, SamplerError> {
        Ok(self.uptime)
    }

    fn sample(&mut self) -> Result<Sample, SamplerError> {
        match self.script.pop_front() {
            Some(Some((cpu, mem))) => {
                self.cpu_load = CpuLoad::new(cpu).map_err(|e| SamplerError::ReadFailed {
                    metric: "cpu load",
                    message: e.to_string(),
                })?;
                self.available_memory_mb = mem;
                Ok(Sample::new(self.cpu_load, self.available_memory_mb, self.uptime))
            }
            Some(None) => Err(SamplerError::ReadFailed {
                metric: "cpu load",
                message: "scripted failure".to_string(),
            }),
            None => {
                if let Some(shutdown) = &self.stop_when_exhausted {
                    shutdown.request();
                }
                Err(SamplerError::ReadFailed {
                    metric: "cpu load",
                    message: "script exhausted".to_string(),
                })
            }
        }
    }
}

/// A call received by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    Status { status: String, uptime: String },
    Alert { message: String, voice: Option<Voice> },
    Visual(VisualState),
    OpenUrl(String),
}

/// Notifier that records every call
///
/// Clones share the same log, so a test can keep one clone after moving the
/// other into a monitor.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotifierEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all recorded events
    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Alert messages with their voices, in order
    pub fn alerts(&self) -> Vec<(String, Option<Voice>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NotifierEvent::Alert { message, voice } => Some((message, voice)),
                _ => None,
            })
            .collect()
    }

    /// Visual states, in order
    pub fn visual_states(&self) -> Vec<VisualState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NotifierEvent::Visual(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Status lines, in order
    pub fn statuses(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NotifierEvent::Status { status, .. } => Some(status),
                _ => None,
            })
            .collect()
    }

    /// URLs opened, in order
    pub fn opened_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NotifierEvent::OpenUrl(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: NotifierEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn set_status_text(&mut self, status: &str, uptime: &str) -> Result<(), NotifyError> {
        self.record(NotifierEvent::Status {
            status: status.to_string(),
            uptime: uptime.to_string(),
        });
        Ok(())
    }

    fn show_alert(&mut self, message: &str, voice: Option<Voice>) -> Result<(), NotifyError> {
        self.record(NotifierEvent::Alert {
            message: message.to_string(),
            voice,
        });
        Ok(())
    }

    fn set_visual_state(&mut self, state: VisualState) -> Result<(), NotifyError> {
        self.record(NotifierEvent::Visual(state));
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<(), NotifyError> {
        self.record(NotifierEvent::OpenUrl(url.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Notifier whose every call fails
#[derive(Debug, Default)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn set_status_text(&mut self, _status: &str, _uptime: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Speech("unavailable".to_string()))
    }

    fn show_alert(&mut self, _message: &str, _voice: Option<Voice>) -> Result<(), NotifyError> {
        Err(NotifyError::Speech("unavailable".to_string()))
    }

    fn set_visual_state(&mut self, _state: VisualState) -> Result<(), NotifyError> {
        Err(NotifyError::Speech("unavailable".to_string()))
    }

    fn open_url(&mut self, _url: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Browser("unavailable".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sampler_follows_script() {
        let mut sampler = MockSampler::with_cpu_script(&[50, 85]);
        assert_eq!(sampler.sample().unwrap().cpu_load.as_percentage(), 50);
        assert_eq!(sampler.sample().unwrap().cpu_load.as_percentage(), 85);
        assert!(sampler.sample().is_err());
    }

    #[test]
    fn test_mock_sampler_requests_shutdown_when_exhausted() {
        let shutdown = Shutdown::new();
        let mut sampler = MockSampler::new().stop_when_exhausted(shutdown.clone());
        assert!(sampler.sample().is_err());
        assert!(shutdown.is_requested());
    }

    #[test]
    fn test_recording_notifier_shares_log() {
        let recorder = RecordingNotifier::new();
        let mut moved = recorder.clone();
        moved.show_alert("hello", None).unwrap();
        assert_eq!(recorder.alerts(), vec![("hello".to_string(), None)]);
    }
}
