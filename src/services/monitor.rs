//! Alert monitor
//!
//! Samples the host every tick, runs the per-channel edge detection and
//! drives the notifier. Mute levels are persisted exactly once when the loop
//! ends.

use crate::alerts::{
    AlertConfig, Channel, ChannelState, Delivery, Edge, Notifier, VisualState, Voice,
};
use crate::domain::{CpuLoad, Sample};
use crate::error::{AppError, SamplerError};
use crate::sampler::Sampler;
use crate::services::Shutdown;
use crate::store::ConfigStore;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Time between ticks
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
/// CPU load above this alerts
pub const CPU_ALERT_THRESHOLD: u8 = 80;
/// Available memory below this alerts
pub const MEMORY_ALERT_THRESHOLD_MB: u64 = 1024;
/// Opened the first time the CPU maxes out
pub const DEFAULT_REMEDIAL_URL: &str = "http://www.google.com/search?q=my+cpu+is+burning";

/// Messages picked at random while the CPU sits at 100%
pub const CPU_MAXED_OUT_MESSAGES: [&str; 5] = [
    "WARNING: Holy crap, your CPU is about to catching fire!",
    "WARNING: Oh my god, you should not run your CPU that hard!",
    "WARNING: Stop it, it's burning!",
    "WARNING: Your CPU is officially chasing squirrels!",
    "RED ALERT! RED ALERT! RED ALERT!",
];

/// Welcome message naming the program and its version
pub fn greeting() -> String {
    format!(
        "Hello and welcome to {} version {}\n{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    )
}

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between ticks
    pub interval: Duration,
    /// Default speaking voice
    pub voice: Voice,
    /// URL opened the first time the CPU maxes out
    pub remedial_url: String,
    /// Greet and tell the uptime when the loop starts
    pub announce_startup: bool,
    /// Stop monitoring on a sampler failure instead of skipping the tick
    pub abort_on_sampler_error: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: SAMPLE_INTERVAL,
            voice: Voice::default(),
            remedial_url: DEFAULT_REMEDIAL_URL.to_string(),
            announce_startup: true,
            abort_on_sampler_error: false,
        }
    }
}

/// Which channels were in their alert range on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub cpu_in_alert: bool,
    pub memory_in_alert: bool,
}

impl TickOutcome {
    /// Whether any channel is alerting
    pub fn alert(&self) -> bool {
        self.cpu_in_alert || self.memory_in_alert
    }
}

/// Polling alert state machine
pub struct AlertMonitor<S: Sampler, N: Notifier> {
    config: MonitorConfig,
    sampler: S,
    notifier: N,
    alerts: Arc<AlertConfig>,
    store: Arc<Mutex<ConfigStore>>,
    cpu: ChannelState,
    memory: ChannelState,
    website_opened: bool,
    rng: StdRng,
}

impl<S: Sampler, N: Notifier> AlertMonitor<S, N> {
    /// Create a new monitor
    ///
    /// `alerts` is read on every tick and may be changed from other threads.
    /// `store` receives the mute levels when the monitor stops.
    pub fn new(
        config: MonitorConfig,
        sampler: S,
        notifier: N,
        alerts: Arc<AlertConfig>,
        store: Arc<Mutex<ConfigStore>>,
    ) -> Self {
        Self {
            config,
            sampler,
            notifier,
            alerts,
            store,
            cpu: ChannelState::new(),
            memory: ChannelState::new(),
            website_opened: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Builder: pick maxed-out messages with `rng`
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// CPU channel state
    pub fn cpu_state(&self) -> &ChannelState {
        &self.cpu
    }

    /// Memory channel state
    pub fn memory_state(&self) -> &ChannelState {
        &self.memory
    }

    /// Whether the remedial URL was already opened
    pub fn website_opened(&self) -> bool {
        self.website_opened
    }

    /// Greet the user and tell the uptime
    ///
    /// Both messages use the default voice and ignore mute levels.
    pub fn announce(&mut self) {
        self.show(&greeting(), Some(self.config.voice));

        match self.sampler.uptime() {
            Ok(uptime) => {
                let message = crate::domain::Uptime::from(uptime).to_string();
                self.show(&message, Some(self.config.voice));
            }
            Err(e) => log::warn!("Failed to read uptime: {}", e),
        }
    }

    /// Read the sampler and evaluate one tick
    pub fn run_tick(&mut self) -> Result<TickOutcome, SamplerError> {
        let sample = self.sampler.sample()?;
        Ok(self.tick(&sample))
    }

    /// Evaluate one sample
    pub fn tick(&mut self, sample: &Sample) -> TickOutcome {
        let status = sample.status_line();
        let uptime = sample.uptime.to_string();
        if let Err(e) = self.notifier.set_status_text(&status, &uptime) {
            log::warn!(
                "Failed to update status via {}: {}",
                self.notifier.name(),
                e
            );
        }

        let outcome = TickOutcome {
            cpu_in_alert: self.evaluate_cpu(sample.cpu_load),
            memory_in_alert: self.evaluate_memory(sample.available_memory_mb),
        };

        let state = VisualState::from_alert(outcome.alert());
        if let Err(e) = self.notifier.set_visual_state(state) {
            log::warn!(
                "Failed to set visual state via {}: {}",
                self.notifier.name(),
                e
            );
        }

        outcome
    }

    fn evaluate_cpu(&mut self, load: CpuLoad) -> bool {
        let percent = load.as_percentage();
        if percent <= CPU_ALERT_THRESHOLD {
            if self.cpu.observe(false) == Edge::Falling {
                log::debug!("CPU load recovered to {}%", percent);
            }
            return false;
        }

        // The maxed-out tier fires every tick and leaves the armed flag alone.
        if load.is_maxed_out() {
            let message = CPU_MAXED_OUT_MESSAGES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(CPU_MAXED_OUT_MESSAGES[0]);
            self.deliver(Channel::Cpu, message, self.config.voice.urgent());

            if !self.website_opened {
                self.website_opened = true;
                let url = self.config.remedial_url.clone();
                if let Err(e) = self.notifier.open_url(&url) {
                    log::warn!("Failed to open {}: {}", url, e);
                }
            }
        } else if self.cpu.observe(true) == Edge::Rising {
            let message = format!("The current CPU load is {} percent.", percent);
            self.deliver(Channel::Cpu, &message, self.config.voice);
        }

        true
    }

    fn evaluate_memory(&mut self, available_mb: u64) -> bool {
        let in_range = available_mb < MEMORY_ALERT_THRESHOLD_MB;
        match self.memory.observe(in_range) {
            Edge::Rising => {
                let message = format!(
                    "The available memory is under 1GB. You currently have {} megabytes of memory available.",
                    available_mb
                );
                self.deliver(Channel::Memory, &message, self.config.voice);
            }
            Edge::Falling => log::debug!("Available memory recovered to {} MB", available_mb),
            Edge::Holding | Edge::Quiet => {}
        }
        in_range
    }

    fn deliver(&mut self, channel: Channel, message: &str, voice: Voice) {
        let state = match channel {
            Channel::Cpu => &mut self.cpu,
            Channel::Memory => &mut self.memory,
        };
        state.set_last_message(message);

        let level = self.alerts.mute_for(channel);
        let voice = match level.delivery() {
            Delivery::ShowAndSpeak => Some(voice),
            Delivery::ShowSilently => None,
            Delivery::Suppress => {
                log::debug!("Suppressed {} alert (mute {}): {}", channel, level, message);
                return;
            }
        };

        log::info!("{} alert: {}", channel, message);
        self.show(message, voice);
    }

    fn show(&mut self, message: &str, voice: Option<Voice>) {
        if let Err(e) = self.notifier.show_alert(message, voice) {
            log::warn!(
                "Failed to send notification via {}: {}",
                self.notifier.name(),
                e
            );
        }
    }

    /// Run the loop until shutdown is requested, then persist mute levels
    ///
    /// Shutdown is checked between ticks and while sleeping, so a request
    /// arriving mid-tick lets that tick finish. Mute levels are saved once
    /// on every exit path.
    pub fn run(mut self, shutdown: &Shutdown) -> Result<(), AppError> {
        log::info!("Alert monitor started (interval {:?})", self.config.interval);

        if self.config.announce_startup && !shutdown.is_requested() {
            self.announce();
        }

        let mut result = Ok(());
        while !shutdown.is_requested() {
            if let Err(e) = self.run_tick() {
                if self.config.abort_on_sampler_error {
                    log::error!("Sampling failed, stopping monitor: {}", e);
                    result = Err(e.into());
                    break;
                }
                log::warn!("Sampling failed, skipping tick: {}", e);
            }

            shutdown.wait(self.config.interval);
        }

        let saved = self.finish();
        result.and(saved)
    }

    /// Run the loop on a dedicated thread
    pub fn spawn(self, shutdown: Shutdown) -> io::Result<JoinHandle<Result<(), AppError>>>
    where
        S: 'static,
        N: 'static,
    {
        thread::Builder::new()
            .name("alert-monitor".to_string())
            .spawn(move || self.run(&shutdown))
    }

    fn finish(self) -> Result<(), AppError> {
        let Self {
            sampler,
            notifier,
            alerts,
            store,
            ..
        } = self;

        let saved = {
            let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
            alerts.save(&mut store)
        };

        drop(sampler);
        drop(notifier);
        log::info!("Alert monitor stopped");

        saved.map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{MuteLevel, VoiceGender, MUTE_CPU_ALERT_KEY, MUTE_MEM_ALERT_KEY};
    use crate::mock::{FailingNotifier, MockSampler, RecordingNotifier};
    use tempfile::TempDir;

    const CPU_LOAD_PREFIX: &str = "The current CPU load is";

    struct Fixture {
        _dir: TempDir,
        store: Arc<Mutex<ConfigStore>>,
        alerts: Arc<AlertConfig>,
    }

    impl Fixture {
        fn new(memory_mute: MuteLevel, cpu_mute: MuteLevel) -> Self {
            let dir = TempDir::new().unwrap();
            let store = ConfigStore::open(dir.path().join("config.json")).unwrap();
            Self {
                _dir: dir,
                store: Arc::new(Mutex::new(store)),
                alerts: Arc::new(AlertConfig::new(memory_mute, cpu_mute)),
            }
        }

        fn monitor<S: Sampler>(
            &self,
            sampler: S,
            notifier: RecordingNotifier,
        ) -> AlertMonitor<S, RecordingNotifier> {
            let config = MonitorConfig {
                interval: Duration::ZERO,
                announce_startup: false,
                ..MonitorConfig::default()
            };
            AlertMonitor::new(
                config,
                sampler,
                notifier,
                Arc::clone(&self.alerts),
                Arc::clone(&self.store),
            )
            .with_rng(StdRng::seed_from_u64(7))
        }
    }

    fn sample(cpu: u8, mem: u64) -> Sample {
        Sample::new(CpuLoad::new(cpu).unwrap(), mem, Duration::from_secs(90))
    }

    fn is_maxed_out_message(message: &str) -> bool {
        CPU_MAXED_OUT_MESSAGES.contains(&message)
    }

    #[test]
    fn test_monitor_config_default() {
        let config = MonitorConfig::default();
        assert_eq!(config.interval, Duration::from_secs(1));
        assert!(config.announce_startup);
        assert!(!config.abort_on_sampler_error);
        assert_eq!(config.remedial_url, DEFAULT_REMEDIAL_URL);
    }

    #[test]
    fn test_cpu_scenario() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        for load in [50, 85, 90, 85, 70, 95, 100, 100, 60] {
            monitor.tick(&sample(load, 8192));
        }

        let alerts = recorder.alerts();
        let load_messages: Vec<_> = alerts
            .iter()
            .filter(|(m, _)| m.starts_with(CPU_LOAD_PREFIX))
            .map(|(m, _)| m.as_str())
            .collect();
        assert_eq!(
            load_messages,
            vec![
                "The current CPU load is 85 percent.",
                "The current CPU load is 95 percent."
            ]
        );

        let maxed: Vec<_> = alerts
            .iter()
            .filter(|(m, _)| is_maxed_out_message(m))
            .collect();
        assert_eq!(maxed.len(), 2);
        assert_eq!(alerts.len(), 4);

        assert_eq!(recorder.opened_urls(), vec![DEFAULT_REMEDIAL_URL.to_string()]);
        assert!(monitor.website_opened());
        assert!(!monitor.cpu_state().is_armed());
    }

    #[test]
    fn test_maxed_out_uses_urgent_voice() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        monitor.tick(&sample(85, 8192));
        monitor.tick(&sample(100, 8192));

        let alerts = recorder.alerts();
        let default_voice = Voice::new(VoiceGender::Male, 0);
        assert_eq!(alerts[0].1, Some(default_voice));
        assert_eq!(alerts[1].1, Some(Voice::new(VoiceGender::Female, 2)));
    }

    #[test]
    fn test_maxed_out_fires_every_tick_regardless_of_armed() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        monitor.tick(&sample(90, 8192));
        assert!(monitor.cpu_state().is_armed());
        for _ in 0..4 {
            monitor.tick(&sample(100, 8192));
        }

        let alerts = recorder.alerts();
        assert_eq!(alerts.len(), 5);
        assert!(alerts[1..].iter().all(|(m, _)| is_maxed_out_message(m)));
        assert_eq!(recorder.opened_urls().len(), 1);
    }

    #[test]
    fn test_browser_opens_once_per_lifetime() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        for load in [100, 20, 100, 50, 100] {
            monitor.tick(&sample(load, 8192));
        }
        assert_eq!(recorder.opened_urls().len(), 1);
    }

    #[test]
    fn test_holding_between_thresholds_does_not_refire() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        for load in [81, 99, 85, 90, 81] {
            monitor.tick(&sample(load, 8192));
        }
        assert_eq!(recorder.alerts().len(), 1);

        monitor.tick(&sample(80, 8192));
        assert!(!monitor.cpu_state().is_armed());
        monitor.tick(&sample(81, 8192));
        assert_eq!(recorder.alerts().len(), 2);
    }

    #[test]
    fn test_memory_scenario_voice_muted() {
        let fixture = Fixture::new(MuteLevel::Voice, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        for mb in [2000, 900, 800, 1200, 500] {
            monitor.tick(&sample(10, mb));
        }

        let alerts = recorder.alerts();
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].0.contains("You currently have 900 megabytes"));
        assert!(alerts[1].0.contains("You currently have 500 megabytes"));
        assert!(alerts.iter().all(|(_, voice)| voice.is_none()));
    }

    #[test]
    fn test_memory_threshold_is_exclusive() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        let outcome = monitor.tick(&sample(10, 1024));
        assert!(!outcome.memory_in_alert);
        let outcome = monitor.tick(&sample(10, 1023));
        assert!(outcome.memory_in_alert);
        assert_eq!(recorder.alerts().len(), 1);
    }

    #[test]
    fn test_full_mute_keeps_status_and_visual_state() {
        let fixture = Fixture::new(MuteLevel::Full, MuteLevel::Full);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        monitor.tick(&sample(90, 500));
        monitor.tick(&sample(100, 500));
        monitor.tick(&sample(10, 4096));

        assert!(recorder.alerts().is_empty());
        assert_eq!(
            recorder.statuses(),
            vec![
                "CPU Load: 90%, Memory Available: 500 MB".to_string(),
                "CPU Load: 100%, Memory Available: 500 MB".to_string(),
                "CPU Load: 10%, Memory Available: 4096 MB".to_string(),
            ]
        );
        assert_eq!(
            recorder.visual_states(),
            vec![VisualState::Alert, VisualState::Alert, VisualState::Normal]
        );
        assert_eq!(recorder.opened_urls().len(), 1);
    }

    #[test]
    fn test_suppressed_message_is_still_recorded() {
        let fixture = Fixture::new(MuteLevel::Full, MuteLevel::Full);
        let mut monitor = fixture.monitor(MockSampler::new(), RecordingNotifier::new());

        monitor.tick(&sample(90, 500));
        assert_eq!(
            monitor.cpu_state().last_message(),
            Some("The current CPU load is 90 percent.")
        );
        assert!(monitor
            .memory_state()
            .last_message()
            .is_some_and(|m| m.contains("500 megabytes")));
    }

    #[test]
    fn test_mute_change_observed_next_tick() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let mut monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        monitor.tick(&sample(90, 8192));
        fixture.alerts.set_cpu_mute(MuteLevel::Full);
        monitor.tick(&sample(10, 8192));
        monitor.tick(&sample(90, 8192));

        assert_eq!(recorder.alerts().len(), 1);
    }

    #[test]
    fn test_visual_state_is_or_of_channels() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let mut monitor = fixture.monitor(MockSampler::new(), RecordingNotifier::new());

        assert!(!monitor.tick(&sample(10, 4096)).alert());
        assert!(monitor.tick(&sample(95, 4096)).alert());
        assert!(monitor.tick(&sample(10, 100)).alert());
    }

    #[test]
    fn test_notifier_failures_do_not_stop_tick() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let config = MonitorConfig {
            interval: Duration::ZERO,
            announce_startup: false,
            ..MonitorConfig::default()
        };
        let mut monitor = AlertMonitor::new(
            config,
            MockSampler::new(),
            FailingNotifier,
            Arc::clone(&fixture.alerts),
            Arc::clone(&fixture.store),
        );

        let outcome = monitor.tick(&sample(100, 100));
        assert!(outcome.cpu_in_alert && outcome.memory_in_alert);
        assert!(monitor.website_opened());
    }

    #[test]
    fn test_run_skips_failed_ticks_and_saves_once() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let shutdown = Shutdown::new();
        let mut sampler = MockSampler::new().stop_when_exhausted(shutdown.clone());
        sampler.push(85, 8192);
        sampler.push_failure();
        sampler.push(10, 8192);
        sampler.push(90, 8192);

        let recorder = RecordingNotifier::new();
        let monitor = fixture.monitor(sampler, recorder.clone());
        fixture.alerts.set_memory_mute(MuteLevel::Voice);

        monitor.run(&shutdown).unwrap();

        assert_eq!(recorder.statuses().len(), 3);
        assert_eq!(recorder.alerts().len(), 2);

        let store = fixture.store.lock().unwrap();
        let reopened = ConfigStore::open(store.path()).unwrap();
        assert_eq!(reopened.get(MUTE_MEM_ALERT_KEY), Some("Voice"));
        assert_eq!(reopened.get(MUTE_CPU_ALERT_KEY), Some("None"));
    }

    #[test]
    fn test_run_aborts_on_sampler_error_when_configured() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::Full);
        let mut sampler = MockSampler::new();
        sampler.push(50, 8192);
        sampler.push_failure();
        sampler.push(50, 8192);

        let recorder = RecordingNotifier::new();
        let config = MonitorConfig {
            interval: Duration::ZERO,
            announce_startup: false,
            abort_on_sampler_error: true,
            ..MonitorConfig::default()
        };
        let monitor = AlertMonitor::new(
            config,
            sampler,
            recorder.clone(),
            Arc::clone(&fixture.alerts),
            Arc::clone(&fixture.store),
        );

        let result = monitor.run(&Shutdown::new());
        assert!(matches!(result, Err(AppError::Sampler(_))));
        assert_eq!(recorder.statuses().len(), 1);

        let store = fixture.store.lock().unwrap();
        let reopened = ConfigStore::open(store.path()).unwrap();
        assert_eq!(reopened.get(MUTE_CPU_ALERT_KEY), Some("Full"));
    }

    #[test]
    fn test_run_memory_script_until_exhausted() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let shutdown = Shutdown::new();
        let sampler = MockSampler::with_memory_script(&[2000, 900, 800, 1200, 500])
            .stop_when_exhausted(shutdown.clone());

        let recorder = RecordingNotifier::new();
        fixture.monitor(sampler, recorder.clone()).run(&shutdown).unwrap();

        let alerts = recorder.alerts();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|(_, voice)| voice.is_some()));
        assert_eq!(
            recorder.visual_states(),
            vec![
                VisualState::Normal,
                VisualState::Alert,
                VisualState::Alert,
                VisualState::Normal,
                VisualState::Alert
            ]
        );
    }

    #[test]
    fn test_run_with_shutdown_already_requested() {
        let fixture = Fixture::new(MuteLevel::Full, MuteLevel::Voice);
        let recorder = RecordingNotifier::new();
        let monitor = fixture.monitor(MockSampler::with_cpu_script(&[90]), recorder.clone());

        let shutdown = Shutdown::new();
        shutdown.request();
        monitor.run(&shutdown).unwrap();

        assert!(recorder.events().is_empty());
        let store = fixture.store.lock().unwrap();
        assert_eq!(store.get(MUTE_MEM_ALERT_KEY), Some("Full"));
        assert_eq!(store.get(MUTE_CPU_ALERT_KEY), Some("Voice"));
    }

    #[test]
    fn test_announce_greets_and_tells_uptime() {
        let fixture = Fixture::new(MuteLevel::Full, MuteLevel::Full);
        let recorder = RecordingNotifier::new();
        let sampler = MockSampler::new().with_uptime(Duration::from_secs(3 * 3600 + 5));
        let mut monitor = fixture.monitor(sampler, recorder.clone());

        monitor.announce();

        let alerts = recorder.alerts();
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].0.starts_with("Hello and welcome to perfwatch version"));
        assert_eq!(
            alerts[1].0,
            "System is up for 0 days, 3 hours, 0 minutes and 5 seconds."
        );
        assert!(alerts.iter().all(|(_, voice)| voice.is_some()));
    }

    #[test]
    fn test_spawned_monitor_stops_on_request() {
        let fixture = Fixture::new(MuteLevel::None, MuteLevel::None);
        let recorder = RecordingNotifier::new();
        let monitor = fixture.monitor(MockSampler::new(), recorder.clone());

        let shutdown = Shutdown::new();
        let handle = monitor.spawn(shutdown.clone()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        shutdown.request();

        handle.join().unwrap().unwrap();
        let store = fixture.store.lock().unwrap();
        assert_eq!(store.get(MUTE_CPU_ALERT_KEY), Some("None"));
    }
}
