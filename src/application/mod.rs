//! Application layer - services that wire the domain to a backend

pub mod player;

pub use player::SoundPlayer;
