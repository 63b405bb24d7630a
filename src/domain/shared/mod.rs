//! Shared kernel - error and result types used by every module

pub mod error;
pub mod result;

pub use error::SoundError;
pub use result::Result;
