//! MCI command execution interface

use crate::domain::shared::Result;

/// Default reply buffer capacity, in characters
pub const DEFAULT_REPLY_CAPACITY: usize = 1024;

/// Sends MCI command strings to a multimedia service
///
/// Implementations return the reply text when the service reports success and
/// `SoundError::Mci` carrying the service's error text otherwise.
#[cfg_attr(test, mockall::automock)]
pub trait MciBackend: Send + Sync {
    /// Execute one command string
    fn send(&self, command: &str) -> Result<String>;
}
