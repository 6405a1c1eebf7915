//! Device access layer for HID enumeration and report inspection
//!
//! This crate wraps raw HID access behind a small injectable boundary:
//!
//! - [`DeviceAccess`] — enumerate attached devices, open one by identity
//! - [`DeviceHandle`] — read input reports and query descriptor strings
//!
//! The production implementation ([`HidAccess`]) sits on top of hidapi.
//! Consumers take the traits, not the backend, so tests can substitute an
//! in-memory registry for real hardware.

pub mod error;
pub mod printer;
pub mod reader;
pub mod types;
pub mod watch;

mod hid;

pub use error::AccessError;
pub use hid::HidAccess;
pub use reader::ReadLoop;
pub use types::{DeviceSummary, ReadMode, WatchEvent};
pub use watch::DeviceWatcher;

/// Entry point into the HID subsystem.
///
/// One instance is constructed during process setup and passed to whatever
/// needs device access. Implementations must release any native resources
/// acquired during a scan before the call returns.
pub trait DeviceAccess: Send + Sync {
    /// Enumerate currently attached devices.
    ///
    /// Returns an ordered snapshot, possibly empty. Fails with
    /// [`AccessError::Init`] when the underlying enumeration mechanism
    /// cannot run at all (missing driver, no permissions).
    fn list_devices(&self) -> Result<Vec<DeviceSummary>, AccessError>;

    /// Open one device by vendor/product identity.
    ///
    /// `serial` narrows the match to a specific unit when several identical
    /// devices are attached. Single attempt, no retry: [`AccessError::NotFound`]
    /// when nothing matches, [`AccessError::AccessDenied`] when the device
    /// exists but cannot be claimed.
    fn open(
        &self,
        vendor_id: u16,
        product_id: u16,
        serial: Option<&str>,
    ) -> Result<Box<dyn DeviceHandle>, AccessError>;
}

/// An open, exclusively owned connection to one physical device.
///
/// The handle is released when dropped, exactly once, on every exit path.
/// Read mode is selected once via [`DeviceHandle::set_mode`] and not
/// otherwise validated.
pub trait DeviceHandle: Send + std::fmt::Debug {
    /// Switch between blocking and non-blocking reads.
    fn set_mode(&mut self, mode: ReadMode) -> Result<(), AccessError>;

    /// Pull the next input report into `buf`, up to its capacity.
    ///
    /// Blocking mode waits until a report is available; non-blocking mode
    /// returns `Ok(0)` immediately when nothing is queued.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, AccessError>;

    /// Manufacturer string descriptor, if the device reports one.
    fn manufacturer(&self) -> Result<Option<String>, AccessError>;

    /// Product string descriptor, if the device reports one.
    fn product(&self) -> Result<Option<String>, AccessError>;

    /// Serial number string descriptor, if the device reports one.
    fn serial_number(&self) -> Result<Option<String>, AccessError>;

    /// The enumeration snapshot this handle was opened from.
    fn summary(&self) -> &DeviceSummary;
}
