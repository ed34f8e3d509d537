//! Run command implementation
//!
//! Starts the alert monitor on a background thread and serves the
//! interactive console on the main thread until shutdown.

use crate::alerts::{AlertConfig, Notifier, StatusBoard, TerminalNotifier, Voice};
use crate::cli::console::{ConsoleCommand, CONSOLE_HELP};
use crate::config::Settings;
use crate::domain::Uptime;
use crate::error::{AppError, Result};
use crate::sampler::{Sampler, SystemSampler};
use crate::services::monitor::greeting;
use crate::services::{AlertMonitor, Shutdown};
use crate::store::ConfigStore;

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use super::open_store;

/// How often the console loop checks for shutdown
const CONSOLE_POLL: Duration = Duration::from_millis(200);

/// Execute the run command
pub fn run_monitor(settings: &Settings) -> Result<()> {
    let store_path = settings.store_path();
    let mut store = open_store(&store_path)?;
    log::info!("Using store {}", store_path.display());

    let alerts = Arc::new(AlertConfig::load(&mut store));
    let store = Arc::new(Mutex::new(store));

    let sampler = SystemSampler::new()?;
    let board = StatusBoard::new();
    let terminal = || {
        TerminalNotifier::new(board.clone())
            .with_speech(settings.speech_command())
            .with_browser(settings.browser_command())
    };
    let notifier = terminal();
    let console_notifier = terminal();

    let shutdown = Shutdown::new();
    let signal = shutdown.clone();
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        signal.request();
    })?;

    let monitor = AlertMonitor::new(
        settings.monitor_config(),
        sampler,
        notifier,
        Arc::clone(&alerts),
        Arc::clone(&store),
    );
    let handle = monitor.spawn(shutdown.clone())?;

    println!("perfwatch is running. Type 'help' for commands, Ctrl+C to stop.");
    let mut console = Console {
        alerts,
        store,
        board,
        shutdown: shutdown.clone(),
        sampler: SystemSampler::new()?,
        notifier: console_notifier,
        voice: settings.voice(),
    };
    let lines = spawn_line_reader()?;
    console.serve(&lines, || handle.is_finished());

    shutdown.request();
    handle.join().map_err(|_| AppError::MonitorPanicked)?
}

/// Forward stdin lines over a channel so the console loop can time out
fn spawn_line_reader() -> io::Result<Receiver<String>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("console-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Foreground side of the process
///
/// Owns its own sampler and notifier so `uptime` and `greet` answer
/// immediately instead of waiting for the next monitor tick.
struct Console<S: Sampler, N: Notifier> {
    alerts: Arc<AlertConfig>,
    store: Arc<Mutex<ConfigStore>>,
    board: StatusBoard,
    shutdown: Shutdown,
    sampler: S,
    notifier: N,
    voice: Voice,
}

impl<S: Sampler, N: Notifier> Console<S, N> {
    /// Handle lines until shutdown, `quit`, or the monitor exits on its own
    fn serve<F: Fn() -> bool>(&mut self, lines: &Receiver<String>, monitor_done: F) {
        let mut stdin_open = true;
        while !self.shutdown.is_requested() && !monitor_done() {
            if !stdin_open {
                self.shutdown.wait(CONSOLE_POLL);
                continue;
            }

            match lines.recv_timeout(CONSOLE_POLL) {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => match line.parse::<ConsoleCommand>() {
                    Ok(command) => self.handle(command),
                    Err(e) => println!("{}. Type 'help' for commands.", e),
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("Console input closed");
                    stdin_open = false;
                }
            }
        }
    }

    fn handle(&mut self, command: ConsoleCommand) {
        match command {
            ConsoleCommand::Mute { channel, level } => {
                self.alerts.set_mute_for(channel, level);
                log::info!("{} alert mute changed to {}", channel, level);
                println!("{} alert mute set to {}", channel, level);
            }
            ConsoleCommand::Status => {
                let snapshot = self.board.snapshot();
                println!("{}", snapshot.status);
                println!("{}", snapshot.uptime);
                println!("Indicator: {}", snapshot.visual_state);
                println!(
                    "Mute: memory={}, cpu={}",
                    self.alerts.memory_mute(),
                    self.alerts.cpu_mute()
                );
            }
            ConsoleCommand::Uptime => match self.sampler.uptime() {
                Ok(uptime) => self.say(&Uptime::from(uptime).to_string()),
                Err(e) => println!("Cannot read uptime: {}", e),
            },
            ConsoleCommand::Greet => self.say(&greeting()),
            ConsoleCommand::Save => {
                let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
                match self.alerts.save(&mut store) {
                    Ok(()) => println!("Saved mute levels to {}", store.path().display()),
                    Err(e) => {
                        log::error!("{}", e);
                        println!("Save failed: {}", e);
                    }
                }
            }
            ConsoleCommand::Help => println!("{}", CONSOLE_HELP),
            ConsoleCommand::Quit => self.shutdown.request(),
        }
    }

    /// Show and speak with the default voice, regardless of mute levels
    fn say(&mut self, message: &str) {
        if let Err(e) = self.notifier.show_alert(message, Some(self.voice)) {
            log::warn!("Failed to send notification via {}: {}", self.notifier.name(), e);
        }
    }
}
