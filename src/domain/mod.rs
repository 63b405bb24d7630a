//! Domain layer - sound handles and the rules around them
//!
//! This layer contains:
//! - Entities: `Sound`, the handle to one open device
//! - Value Objects: aliases and MCI command strings
//! - Ports: `MciBackend`, the command execution interface

pub mod shared;
pub mod sound;

// Re-export commonly used types
pub use shared::{Result, SoundError};
