//! Sound player service - opens sounds against a shared backend and registry

use crate::config::PlaybackConfig;
use crate::domain::shared::Result;
use crate::domain::sound::{MciBackend, Sound, SoundRegistry};
use crate::infrastructure::winmm;
use std::path::Path;
use std::sync::Arc;

/// Entry point for opening sounds
///
/// All sounds opened through one player share its id registry, so their
/// aliases never collide.
#[derive(Clone)]
pub struct SoundPlayer {
    backend: Arc<dyn MciBackend>,
    registry: SoundRegistry,
    options: PlaybackConfig,
}

impl SoundPlayer {
    /// Player using an explicit backend
    pub fn new(backend: Arc<dyn MciBackend>, options: PlaybackConfig) -> Self {
        Self {
            backend,
            registry: SoundRegistry::new(),
            options,
        }
    }

    /// Player talking to the operating system's MCI service
    pub fn system(options: PlaybackConfig) -> Result<Self> {
        let backend = winmm::system_backend(options.reply_capacity)?;
        Ok(Self::new(backend, options))
    }

    /// Open a .WAV file
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<Sound> {
        Sound::open(
            self.backend.clone(),
            self.registry.clone(),
            path,
            &self.options,
        )
    }

    pub fn registry(&self) -> &SoundRegistry {
        &self.registry
    }

    pub fn options(&self) -> &PlaybackConfig {
        &self.options
    }
}
