//! In-memory fake of the access boundary, shared by the integration tests.
//!
//! No hardware involved: devices live in a registry that can be mutated
//! between polls, handles hand out scripted reports, and every release is
//! counted so the tests can assert the exactly-once discipline.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hidprobe_access::{AccessError, DeviceAccess, DeviceHandle, DeviceSummary, ReadMode};

/// One scripted device in the fake registry.
#[derive(Clone)]
pub struct FakeDevice {
    pub summary: DeviceSummary,
    /// Reports handed out in order; afterwards reads yield `Ok(0)`.
    pub reports: Vec<Vec<u8>>,
    /// Fail with `Disconnected` instead of `Ok(0)` once the reports run out.
    pub disconnect_after_reports: bool,
}

impl FakeDevice {
    pub fn new(vendor_id: u16, product_id: u16, path: &str) -> Self {
        Self {
            summary: DeviceSummary {
                vendor_id,
                product_id,
                path: path.into(),
                manufacturer: Some("Fake Labs".into()),
                product: Some("Fake Pad".into()),
                serial: Some("FAKE-0001".into()),
            },
            reports: Vec::new(),
            disconnect_after_reports: false,
        }
    }

    pub fn with_reports(mut self, reports: Vec<Vec<u8>>) -> Self {
        self.reports = reports;
        self
    }

    pub fn disconnecting(mut self) -> Self {
        self.disconnect_after_reports = true;
        self
    }
}

/// Fake registry implementing [`DeviceAccess`].
///
/// `attach`/`detach` mutate the registry between enumerations, which is how
/// the watcher tests simulate hot-plug.
#[derive(Default)]
pub struct FakeAccess {
    devices: Mutex<Vec<FakeDevice>>,
    /// When set, the next `list_devices` call fails once with `Init`
    fail_next_scan: AtomicBool,
    pub opens: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl FakeAccess {
    pub fn new(devices: Vec<FakeDevice>) -> Self {
        Self {
            devices: Mutex::new(devices),
            fail_next_scan: AtomicBool::new(false),
            opens: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn attach(&self, device: FakeDevice) {
        self.devices.lock().unwrap().push(device);
    }

    pub fn detach(&self, path: &str) {
        self.devices.lock().unwrap().retain(|d| d.summary.path != path);
    }

    pub fn fail_next_scan(&self) {
        self.fail_next_scan.store(true, Ordering::SeqCst);
    }
}

impl DeviceAccess for FakeAccess {
    fn list_devices(&self) -> Result<Vec<DeviceSummary>, AccessError> {
        if self.fail_next_scan.swap(false, Ordering::SeqCst) {
            return Err(AccessError::Init("scan unavailable".into()));
        }
        Ok(self
            .devices
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.summary.clone())
            .collect())
    }

    fn open(
        &self,
        vendor_id: u16,
        product_id: u16,
        serial: Option<&str>,
    ) -> Result<Box<dyn DeviceHandle>, AccessError> {
        let devices = self.devices.lock().unwrap();
        let device = devices
            .iter()
            .find(|d| {
                d.summary.vendor_id == vendor_id
                    && d.summary.product_id == product_id
                    && serial.map_or(true, |s| d.summary.serial.as_deref() == Some(s))
            })
            .ok_or_else(|| {
                AccessError::NotFound(format!("{:04x}:{:04x}", vendor_id, product_id))
            })?;

        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeHandle {
            summary: device.summary.clone(),
            reports: device.reports.clone().into(),
            disconnect_after_reports: device.disconnect_after_reports,
            releases: Arc::clone(&self.releases),
        }))
    }
}

#[derive(Debug)]
pub struct FakeHandle {
    summary: DeviceSummary,
    reports: VecDeque<Vec<u8>>,
    disconnect_after_reports: bool,
    releases: Arc<AtomicUsize>,
}

impl DeviceHandle for FakeHandle {
    fn set_mode(&mut self, _mode: ReadMode) -> Result<(), AccessError> {
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, AccessError> {
        match self.reports.pop_front() {
            Some(report) => {
                let n = report.len().min(buf.len());
                buf[..n].copy_from_slice(&report[..n]);
                Ok(n)
            }
            None if self.disconnect_after_reports => Err(AccessError::Disconnected),
            None => Ok(0),
        }
    }

    fn manufacturer(&self) -> Result<Option<String>, AccessError> {
        Ok(self.summary.manufacturer.clone())
    }

    fn product(&self) -> Result<Option<String>, AccessError> {
        Ok(self.summary.product.clone())
    }

    fn serial_number(&self) -> Result<Option<String>, AccessError> {
        Ok(self.summary.serial.clone())
    }

    fn summary(&self) -> &DeviceSummary {
        &self.summary
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
