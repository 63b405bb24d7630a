/// Sound handle backed by an MCI waveaudio device
use super::backend::MciBackend;
use super::command::{parse_millis, Alias, MciCommand, Speaker};
use super::registry::SoundRegistry;
use crate::config::PlaybackConfig;
use crate::domain::shared::{Result, SoundError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// An open WAV file on the MCI service
///
/// The `open` and `playing` flags mirror what the device reports; the device
/// itself stays authoritative. Once closed, every operation except flag
/// inspection fails with [`SoundError::Closed`].
pub struct Sound {
    id: u32,
    alias: Alias,
    path: PathBuf,
    open: bool,
    playing: bool,
    poll_interval: Duration,
    backend: Arc<dyn MciBackend>,
    registry: SoundRegistry,
}

impl Sound {
    /// Open a .WAV file at `path` and switch its time format to milliseconds
    pub fn open<P: AsRef<Path>>(
        backend: Arc<dyn MciBackend>,
        registry: SoundRegistry,
        path: P,
        options: &PlaybackConfig,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let shown = path.display().to_string();
        if shown.is_empty() {
            return Err(SoundError::InvalidPath(shown));
        }
        // MCI splits the open command on spaces
        if shown.contains(' ') {
            return Err(SoundError::PathContainsSpace(shown));
        }

        let id = registry.allocate()?;
        let alias = Alias::new(&options.alias_prefix, id);

        if let Err(e) = send(backend.as_ref(), MciCommand::Open { path: &path, alias: &alias }) {
            registry.release(id);
            return Err(e);
        }
        if let Err(e) = send(backend.as_ref(), MciCommand::SetTimeFormatMs(&alias)) {
            if let Err(close_err) = send(backend.as_ref(), MciCommand::Close(&alias)) {
                warn!("Failed to close {} after open error: {}", alias, close_err);
            }
            registry.release(id);
            return Err(e);
        }

        info!("Opened {} as {}", shown, alias);

        Ok(Self {
            id,
            alias,
            path,
            open: true,
            playing: false,
            poll_interval: options.poll_interval(),
            backend,
            registry,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last known playing state, without asking the device
    pub fn playing_flag(&self) -> bool {
        self.playing
    }

    /// Total length of the sound
    pub fn length(&self) -> Result<Duration> {
        self.ensure_open()?;
        self.status(MciCommand::StatusLength(&self.alias))
    }

    /// Current playback position
    pub fn position(&self) -> Result<Duration> {
        self.ensure_open()?;
        self.status(MciCommand::StatusPosition(&self.alias))
    }

    /// Move to `position`, keeping playback going if it was playing
    pub fn set_position(&mut self, position: Duration) -> Result<()> {
        self.ensure_open()?;
        let was_playing = self.playing;
        if was_playing {
            self.stop()?;
        }
        let millis = u64::try_from(position.as_millis()).unwrap_or(u64::MAX);
        self.send(MciCommand::Seek {
            alias: &self.alias,
            millis,
        })?;
        if was_playing {
            self.play()?;
        }
        Ok(())
    }

    /// Whether the sound is still playing
    ///
    /// Reaching the end of the file clears the playing flag.
    pub fn is_playing(&mut self) -> Result<bool> {
        if self.position()? == self.length()? {
            self.playing = false;
        }
        Ok(self.playing)
    }

    /// Start playing from the current position
    pub fn play(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send(MciCommand::Play(&self.alias))?;
        self.playing = true;
        Ok(())
    }

    /// Stop playback. Can only be resumed with `play()`.
    pub fn stop(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send(MciCommand::Stop(&self.alias))?;
        self.playing = false;
        Ok(())
    }

    /// Pause playback. Can be resumed with `play()` or `resume()`.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send(MciCommand::Pause(&self.alias))?;
        self.playing = false;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send(MciCommand::Resume(&self.alias))?;
        self.playing = true;
        Ok(())
    }

    /// Close the device and give the id back
    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send(MciCommand::Close(&self.alias))?;
        self.open = false;
        self.playing = false;
        self.registry.release(self.id);
        info!("Closed {}", self.alias);
        Ok(())
    }

    /// Volume of `speaker`. Waveaudio devices have no volume control.
    pub fn volume(&self, _speaker: Speaker) -> Result<u32> {
        Err(SoundError::VolumeUnsupported)
    }

    /// Set the volume of `speaker`. Waveaudio devices have no volume control.
    pub fn set_volume(&mut self, _volume: u32, _speaker: Speaker) -> Result<()> {
        Err(SoundError::VolumeUnsupported)
    }

    /// Wait until the sound stops playing
    pub async fn wait_until_stopped(&mut self) -> Result<()> {
        while self.is_playing()? {
            tokio::time::sleep(self.poll_interval).await;
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(SoundError::Closed)
        }
    }

    fn send(&self, command: MciCommand<'_>) -> Result<String> {
        send(self.backend.as_ref(), command)
    }

    fn status(&self, command: MciCommand<'_>) -> Result<Duration> {
        let text = command.to_string();
        let reply = self.send(command)?;
        parse_millis(&text, &reply)
    }
}

impl std::fmt::Debug for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sound")
            .field("id", &self.id)
            .field("alias", &self.alias)
            .field("path", &self.path)
            .field("open", &self.open)
            .field("playing", &self.playing)
            .finish()
    }
}

impl Drop for Sound {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        if let Err(e) = self.send(MciCommand::Close(&self.alias)) {
            warn!("Failed to close {} on drop: {}", self.alias, e);
        }
        self.registry.release(self.id);
    }
}

fn send(backend: &dyn MciBackend, command: MciCommand<'_>) -> Result<String> {
    let text = command.to_string();
    debug!("MCI <- {}", text);
    let reply = backend.send(&text)?;
    debug!("MCI -> {:?}", reply);
    Ok(reply)
}
