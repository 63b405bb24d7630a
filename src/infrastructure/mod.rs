//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - The winmm MCI backend (Windows only)

pub mod winmm;
