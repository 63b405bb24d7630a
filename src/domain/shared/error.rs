//! Sound errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// The MCI service rejected a command
    #[error("MCI error {code}: {message}")]
    Mci { code: u32, message: String },

    #[error("Sound is closed")]
    Closed,

    #[error("Path contains a space: {0}")]
    PathContainsSpace(String),

    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    #[error("Unexpected reply to `{command}`: {reply:?}")]
    InvalidReply { command: String, reply: String },

    #[error("No free sound id")]
    IdsExhausted,

    #[error("Volume control is not supported by waveaudio devices")]
    VolumeUnsupported,

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for SoundError {
    fn from(err: config::ConfigError) -> Self {
        SoundError::Config(err.to_string())
    }
}
