//! winmm backend - sends MCI command strings through `mciSendStringW`

use crate::domain::shared::{Result, SoundError};
use crate::domain::sound::MciBackend;
use std::sync::Arc;

#[cfg(windows)]
pub use self::native::WinMm;

/// Create the backend for the current platform
///
/// Only Windows has an MCI service; elsewhere this fails with
/// `SoundError::Unsupported`.
pub fn system_backend(reply_capacity: usize) -> Result<Arc<dyn MciBackend>> {
    #[cfg(windows)]
    {
        Ok(Arc::new(WinMm::new(reply_capacity)))
    }
    #[cfg(not(windows))]
    {
        let _ = reply_capacity;
        Err(SoundError::Unsupported(
            "MCI playback requires Windows".to_string(),
        ))
    }
}

/// Decode a NUL-terminated UTF-16 buffer
#[cfg_attr(not(windows), allow(dead_code))]
fn decode_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

/// Encode a command as a NUL-terminated UTF-16 string
#[cfg_attr(not(windows), allow(dead_code))]
fn encode_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg_attr(not(windows), allow(dead_code))]
fn mci_error(code: u32, message: Option<String>) -> SoundError {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("unknown MCI error {}", code));
    SoundError::Mci { code, message }
}

#[cfg(windows)]
mod native {
    use super::{decode_wide, encode_wide, mci_error};
    use crate::domain::shared::Result;
    use crate::domain::sound::MciBackend;
    use tracing::debug;
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Media::Multimedia::{mciGetErrorStringW, mciSendStringW};

    /// Error strings are at most 128 characters
    const ERROR_TEXT_CAPACITY: usize = 256;

    /// MCI backend backed by winmm.dll
    #[derive(Debug, Clone)]
    pub struct WinMm {
        reply_capacity: usize,
    }

    impl WinMm {
        pub fn new(reply_capacity: usize) -> Self {
            Self {
                reply_capacity: reply_capacity.max(1),
            }
        }

        fn error_text(code: u32) -> Option<String> {
            let mut buf = vec![0u16; ERROR_TEXT_CAPACITY];
            // SAFETY: the buffer outlives the call and its length is passed alongside it
            let ok = unsafe { mciGetErrorStringW(code, &mut buf) };
            ok.as_bool().then(|| decode_wide(&buf))
        }
    }

    impl MciBackend for WinMm {
        fn send(&self, command: &str) -> Result<String> {
            let wide = encode_wide(command);
            let mut reply = vec![0u16; self.reply_capacity];

            // SAFETY: `wide` is NUL-terminated and both buffers live until the call returns
            let code = unsafe {
                mciSendStringW(PCWSTR(wide.as_ptr()), Some(&mut reply), HWND::default())
            };

            if code != 0 {
                let err = mci_error(code, Self::error_text(code));
                debug!("MCI {} failed: {}", command, err);
                return Err(err);
            }

            Ok(decode_wide(&reply))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wide_is_nul_terminated() {
        let wide = encode_wide("play a");
        assert_eq!(wide.len(), 7);
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(decode_wide(&wide), "play a");
    }

    #[test]
    fn test_decode_stops_at_nul() {
        let mut buf = vec![0u16; 16];
        for (slot, c) in buf.iter_mut().zip("2500".encode_utf16()) {
            *slot = c;
        }
        assert_eq!(decode_wide(&buf), "2500");
    }

    #[test]
    fn test_decode_without_nul() {
        let buf: Vec<u16> = "abc".encode_utf16().collect();
        assert_eq!(decode_wide(&buf), "abc");
    }

    #[test]
    fn test_mci_error_message_fallback() {
        assert_eq!(
            mci_error(275, Some("Cannot find the specified file.".to_string())),
            SoundError::Mci {
                code: 275,
                message: "Cannot find the specified file.".to_string(),
            }
        );
        assert_eq!(
            mci_error(9999, None),
            SoundError::Mci {
                code: 9999,
                message: "unknown MCI error 9999".to_string(),
            }
        );
        assert_eq!(
            mci_error(9999, Some(String::new())),
            SoundError::Mci {
                code: 9999,
                message: "unknown MCI error 9999".to_string(),
            }
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_system_backend_unsupported() {
        assert!(matches!(
            system_backend(1024),
            Err(SoundError::Unsupported(_))
        ));
    }
}
