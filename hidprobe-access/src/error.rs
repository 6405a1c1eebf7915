//! Access layer error types

use thiserror::Error;

/// Errors from device access operations
#[derive(Error, Debug)]
pub enum AccessError {
    /// No attached device matches the requested identity
    #[error("Device not found: {0}")]
    NotFound(String),

    /// Device is present but cannot be claimed (permissions, already open)
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Device went away mid-operation
    #[error("Device disconnected")]
    Disconnected,

    /// The HID subsystem itself is unavailable
    #[error("HID init failed: {0}")]
    Init(String),

    /// Any other transport-level failure
    #[error("HID error: {0}")]
    Hid(String),

    /// Failure writing formatted output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccessError {
    /// `NotFound` means nothing is plugged in, which callers usually treat
    /// as an idle state rather than a failure. Everything else indicates
    /// the device or the HID stack is actually broken.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AccessError::NotFound(_))
    }
}

impl From<hidapi::HidError> for AccessError {
    fn from(e: hidapi::HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") {
            AccessError::AccessDenied(msg)
        } else {
            AccessError::Hid(msg)
        }
    }
}
