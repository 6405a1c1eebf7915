//! hidapi-backed implementation of the access traits

use hidapi::{HidApi, HidDevice};
use tracing::{debug, info};

use crate::error::AccessError;
use crate::types::{DeviceSummary, ReadMode};
use crate::{DeviceAccess, DeviceHandle};

/// Device access over the system hidapi library.
///
/// Each scan builds a fresh `HidApi` context and drops it before returning,
/// so enumeration resources never outlive the call that acquired them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HidAccess;

impl HidAccess {
    pub fn new() -> Self {
        Self
    }

    fn summarize(info: &hidapi::DeviceInfo) -> DeviceSummary {
        DeviceSummary {
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            path: info.path().to_string_lossy().to_string(),
            manufacturer: info.manufacturer_string().map(|s| s.to_string()),
            product: info.product_string().map(|s| s.to_string()),
            serial: info.serial_number().map(|s| s.to_string()),
        }
    }
}

impl DeviceAccess for HidAccess {
    fn list_devices(&self) -> Result<Vec<DeviceSummary>, AccessError> {
        let api = HidApi::new().map_err(|e| AccessError::Init(e.to_string()))?;
        let devices: Vec<DeviceSummary> = api.device_list().map(Self::summarize).collect();
        info!("Found {} devices", devices.len());
        Ok(devices)
    }

    fn open(
        &self,
        vendor_id: u16,
        product_id: u16,
        serial: Option<&str>,
    ) -> Result<Box<dyn DeviceHandle>, AccessError> {
        let api = HidApi::new().map_err(|e| AccessError::Init(e.to_string()))?;

        let info = api
            .device_list()
            .find(|d| {
                d.vendor_id() == vendor_id
                    && d.product_id() == product_id
                    && serial.map_or(true, |s| d.serial_number() == Some(s))
            })
            .ok_or_else(|| {
                AccessError::NotFound(format!("{:04x}:{:04x}", vendor_id, product_id))
            })?;

        let device = info.open_device(&api).map_err(AccessError::from)?;
        let summary = Self::summarize(info);
        info!(
            "Opened {:04x}:{:04x} at {}",
            summary.vendor_id, summary.product_id, summary.path
        );

        Ok(Box::new(HidHandle { device, summary }))
    }
}

/// Open connection to one physical device.
///
/// hidapi closes the underlying descriptor when `HidDevice` drops, which
/// gives us the release-exactly-once discipline for free.
#[derive(Debug)]
pub struct HidHandle {
    device: HidDevice,
    summary: DeviceSummary,
}

impl DeviceHandle for HidHandle {
    fn set_mode(&mut self, mode: ReadMode) -> Result<(), AccessError> {
        debug!("{}: switching to {:?} reads", self.summary.path, mode);
        self.device
            .set_blocking_mode(mode == ReadMode::Blocking)
            .map_err(AccessError::from)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, AccessError> {
        Ok(self.device.read(buf)?)
    }

    fn manufacturer(&self) -> Result<Option<String>, AccessError> {
        Ok(self.device.get_manufacturer_string()?)
    }

    fn product(&self) -> Result<Option<String>, AccessError> {
        Ok(self.device.get_product_string()?)
    }

    fn serial_number(&self) -> Result<Option<String>, AccessError> {
        Ok(self.device.get_serial_number_string()?)
    }

    fn summary(&self) -> &DeviceSummary {
        &self.summary
    }
}
