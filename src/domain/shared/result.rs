//! Sound result type

use super::error::SoundError;

/// Standard result type for sound operations
pub type Result<T> = std::result::Result<T, SoundError>;
