//! mci-sound - WAV playback through the Windows Media Control Interface
//!
//! Sounds are opened as MCI waveaudio devices addressed by an alias and
//! controlled with MCI command strings. The command execution sits behind
//! [`domain::sound::MciBackend`]; the winmm implementation is only built on
//! Windows.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::SoundPlayer;
pub use domain::shared::error::SoundError;
pub use domain::shared::result::Result;
pub use domain::sound::{Sound, Speaker};
