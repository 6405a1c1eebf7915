//! Common types for the access layer

use std::fmt;

use serde::Serialize;

/// Immutable snapshot of one enumerated device.
///
/// Taken at enumeration time; nothing here tracks the device afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
    /// Platform-specific path used to re-open the device
    pub path: String,
    /// Manufacturer string if available
    pub manufacturer: Option<String>,
    /// Product string if available
    pub product: Option<String>,
    /// Serial number if available
    pub serial: Option<String>,
}

impl fmt::Display for DeviceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:04x} {} ({}) serial={} path={}",
            self.vendor_id,
            self.product_id,
            self.product.as_deref().unwrap_or("?"),
            self.manufacturer.as_deref().unwrap_or("?"),
            self.serial.as_deref().unwrap_or("?"),
            self.path,
        )
    }
}

/// Read mode for an open handle, chosen once after opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Wait until a report is available
    #[default]
    Blocking,
    /// Return immediately with zero bytes when nothing is queued
    NonBlocking,
}

/// Connect/disconnect notification from the watcher
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A device appeared since the previous scan
    Added(DeviceSummary),
    /// A device vanished since the previous scan
    Removed(DeviceSummary),
}
