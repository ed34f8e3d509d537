//! Interactive console commands
//!
//! Lines read from stdin while the monitor runs. These replace the tray
//! menu of a desktop build.

use crate::alerts::{Channel, MuteLevel};
use crate::error::ConfigError;
use std::str::FromStr;

/// Help text printed by `help`
pub const CONSOLE_HELP: &str = "\
Commands:
  mute <cpu|memory> <none|voice|full>   change a channel's mute level
  status                                show the latest sample and mute levels
  uptime                                tell the system uptime
  greet                                 say hello and the program version
  save                                  persist mute levels now
  help                                  show this help
  quit                                  stop monitoring and exit";

/// A parsed console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Mute { channel: Channel, level: MuteLevel },
    Status,
    Uptime,
    Greet,
    Save,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = ConfigError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let invalid = |message: String| ConfigError::InvalidValue {
            key: "command".to_string(),
            message,
        };

        match words.as_slice() {
            ["mute", channel, level] => Ok(Self::Mute {
                channel: channel.parse()?,
                level: level.parse()?,
            }),
            ["mute", ..] => Err(invalid(
                "usage: mute <cpu|memory> <none|voice|full>".to_string(),
            )),
            ["status"] => Ok(Self::Status),
            ["uptime"] => Ok(Self::Uptime),
            ["greet"] | ["about"] => Ok(Self::Greet),
            ["save"] => Ok(Self::Save),
            ["help"] | ["?"] => Ok(Self::Help),
            ["quit"] | ["exit"] => Ok(Self::Quit),
            [] => Err(invalid("empty command".to_string())),
            [other, ..] => Err(invalid(format!("unknown command '{}'", other))),
        }
    }
}
