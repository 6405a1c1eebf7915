//! Connect/disconnect watcher over polled enumeration
//!
//! There is no portable hot-plug notification in hidapi, so the watcher
//! re-enumerates on an interval and diffs consecutive snapshots, keyed by
//! device path.

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::AccessError;
use crate::types::{DeviceSummary, WatchEvent};
use crate::DeviceAccess;

/// Default pause between enumeration scans
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Tracks the attached-device set across enumeration snapshots.
#[derive(Default)]
pub struct DeviceWatcher {
    known: HashMap<String, DeviceSummary>,
}

impl DeviceWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the current device set without emitting events, so the first
    /// real poll only reports changes from now on.
    pub fn prime(&mut self, access: &dyn DeviceAccess) -> Result<(), AccessError> {
        for dev in access.list_devices()? {
            self.known.insert(dev.path.clone(), dev);
        }
        debug!("watcher primed with {} devices", self.known.len());
        Ok(())
    }

    /// Diff a fresh enumeration against the previous snapshot.
    pub fn poll(&mut self, access: &dyn DeviceAccess) -> Result<Vec<WatchEvent>, AccessError> {
        let current = access.list_devices()?;
        let mut events = Vec::new();

        let mut next = HashMap::with_capacity(current.len());
        for dev in current {
            if !self.known.contains_key(&dev.path) {
                events.push(WatchEvent::Added(dev.clone()));
            }
            next.insert(dev.path.clone(), dev);
        }
        for (path, dev) in self.known.drain() {
            if !next.contains_key(&path) {
                events.push(WatchEvent::Removed(dev));
            }
        }

        self.known = next;
        Ok(events)
    }
}

/// Poll for hot-plug events until the stop flag is set, printing one line
/// per event. Enumeration hiccups are logged and retried on the next tick
/// rather than ending the watch.
///
/// The snapshot is primed by the first scan that succeeds; until then scans
/// are retried quietly, so devices attached before the watch started never
/// surface as `Added` events.
pub fn run_watch_loop<W: Write>(
    access: &dyn DeviceAccess,
    stop: &AtomicBool,
    interval: Duration,
    out: &mut W,
) -> Result<(), AccessError> {
    let mut watcher = DeviceWatcher::new();
    let mut primed = false;

    while !stop.load(Ordering::SeqCst) {
        if !primed {
            match watcher.prime(access) {
                Ok(()) => primed = true,
                Err(e) => warn!("initial scan failed: {}", e),
            }
        } else {
            match watcher.poll(access) {
                Ok(events) => {
                    for event in events {
                        match event {
                            WatchEvent::Added(dev) => writeln!(out, "added   {}", dev)?,
                            WatchEvent::Removed(dev) => writeln!(out, "removed {}", dev)?,
                        }
                    }
                }
                Err(e) => warn!("enumeration failed: {}", e),
            }
        }
        std::thread::sleep(interval);
    }

    debug!("watch loop stopped");
    Ok(())
}
