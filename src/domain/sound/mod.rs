//! Sound domain - MCI waveaudio playback handles

pub mod backend;
pub mod command;
pub mod entity;
pub mod registry;

pub use backend::MciBackend;
pub use command::{Alias, MciCommand, Speaker};
pub use entity::Sound;
pub use registry::SoundRegistry;
