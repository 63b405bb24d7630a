/// MCI command strings
use crate::domain::shared::{Result, SoundError};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Default alias prefix for sounds opened by this crate
pub const DEFAULT_ALIAS_PREFIX: &str = "MCISND";

/// Alias an open device is addressed by, e.g. `MCISND.00000001`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    /// Build the alias for a sound id
    pub fn new(prefix: &str, id: u32) -> Self {
        Alias(format!("{}.{:08x}", prefix, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Audio channel selector for `setaudio`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Left,
    Right,
    Both,
}

/// A single MCI command addressed to one alias
#[derive(Debug, Clone, PartialEq)]
pub enum MciCommand<'a> {
    Open { path: &'a Path, alias: &'a Alias },
    SetTimeFormatMs(&'a Alias),
    StatusLength(&'a Alias),
    StatusPosition(&'a Alias),
    Seek { alias: &'a Alias, millis: u64 },
    Play(&'a Alias),
    Stop(&'a Alias),
    Pause(&'a Alias),
    Resume(&'a Alias),
    Close(&'a Alias),
    SetAudioVolume {
        alias: &'a Alias,
        channel: &'static str,
        volume: u32,
    },
}

impl fmt::Display for MciCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MciCommand::Open { path, alias } => {
                write!(f, "open {} alias {}", path.display(), alias)
            }
            MciCommand::SetTimeFormatMs(alias) => {
                write!(f, "set {} time format milliseconds", alias)
            }
            MciCommand::StatusLength(alias) => write!(f, "status {} length", alias),
            MciCommand::StatusPosition(alias) => write!(f, "status {} position", alias),
            MciCommand::Seek { alias, millis } => write!(f, "seek {} to {}", alias, millis),
            MciCommand::Play(alias) => write!(f, "play {}", alias),
            MciCommand::Stop(alias) => write!(f, "stop {}", alias),
            MciCommand::Pause(alias) => write!(f, "pause {}", alias),
            MciCommand::Resume(alias) => write!(f, "resume {}", alias),
            MciCommand::Close(alias) => write!(f, "close {}", alias),
            MciCommand::SetAudioVolume {
                alias,
                channel,
                volume,
            } => write!(f, "setaudio {} {} volume to {}", alias, channel, volume),
        }
    }
}

/// Parse a millisecond reply (`status ... length` / `position`) into a duration
pub fn parse_millis(command: &str, reply: &str) -> Result<Duration> {
    reply
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| SoundError::InvalidReply {
            command: command.to_string(),
            reply: reply.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_format() {
        assert_eq!(Alias::new("MCISND", 1).as_str(), "MCISND.00000001");
        assert_eq!(Alias::new("MCISND", 255).as_str(), "MCISND.000000ff");
        assert_eq!(Alias::new("X", 0x1234_abcd).to_string(), "X.1234abcd");
    }

    #[test]
    fn test_command_strings() {
        let alias = Alias::new(DEFAULT_ALIAS_PREFIX, 2);
        let path = Path::new("C:\\sounds\\ding.wav");

        assert_eq!(
            MciCommand::Open { path, alias: &alias }.to_string(),
            "open C:\\sounds\\ding.wav alias MCISND.00000002"
        );
        assert_eq!(
            MciCommand::SetTimeFormatMs(&alias).to_string(),
            "set MCISND.00000002 time format milliseconds"
        );
        assert_eq!(
            MciCommand::StatusLength(&alias).to_string(),
            "status MCISND.00000002 length"
        );
        assert_eq!(
            MciCommand::StatusPosition(&alias).to_string(),
            "status MCISND.00000002 position"
        );
        assert_eq!(
            MciCommand::Seek { alias: &alias, millis: 1500 }.to_string(),
            "seek MCISND.00000002 to 1500"
        );
        assert_eq!(MciCommand::Play(&alias).to_string(), "play MCISND.00000002");
        assert_eq!(MciCommand::Stop(&alias).to_string(), "stop MCISND.00000002");
        assert_eq!(MciCommand::Pause(&alias).to_string(), "pause MCISND.00000002");
        assert_eq!(MciCommand::Resume(&alias).to_string(), "resume MCISND.00000002");
        assert_eq!(MciCommand::Close(&alias).to_string(), "close MCISND.00000002");
        assert_eq!(
            MciCommand::SetAudioVolume {
                alias: &alias,
                channel: "left",
                volume: 500
            }
            .to_string(),
            "setaudio MCISND.00000002 left volume to 500"
        );
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("status a length", "2500").unwrap(), Duration::from_millis(2500));
        assert_eq!(parse_millis("status a length", " 0 \r\n").unwrap(), Duration::ZERO);

        let err = parse_millis("status a length", "abc").unwrap_err();
        assert_eq!(
            err,
            SoundError::InvalidReply {
                command: "status a length".to_string(),
                reply: "abc".to_string(),
            }
        );
    }
}
