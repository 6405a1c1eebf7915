// Command handlers (split from main.rs)

use std::io::{self, Write};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{error, info};

use hidprobe_access::printer::{print_device_list, print_device_strings};
use hidprobe_access::watch::run_watch_loop;
use hidprobe_access::{AccessError, DeviceAccess, ReadLoop, ReadMode};

/// Enumerate and print, as text or JSON. Output goes to stderr so report
/// dumps can be piped separately if the tool ever needs it.
pub fn list(access: &dyn DeviceAccess, json: bool) -> anyhow::Result<()> {
    let devices = access.list_devices().context("enumeration failed")?;
    let stderr = io::stderr();
    let mut out = stderr.lock();

    if json {
        let text = serde_json::to_string_pretty(&devices)?;
        writeln!(out, "{}", text)?;
    } else {
        print_device_list(&mut out, &devices)?;
    }
    Ok(())
}

/// Open one device by identity, show its descriptor strings, then dump
/// input reports until Ctrl-C or a read failure.
#[allow(clippy::too_many_arguments)]
pub fn read(
    access: &dyn DeviceAccess,
    vid: u16,
    pid: u16,
    serial: Option<&str>,
    bufsize: usize,
    delay_ms: u64,
    non_blocking: bool,
    stop: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let handle = match access.open(vid, pid, serial) {
        Ok(handle) => handle,
        Err(e @ AccessError::NotFound(_)) => {
            // Nothing plugged in is an idle state, not a failure
            info!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e).context("open failed"),
    };

    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_device_strings(&mut out, handle.as_ref())?;

    let mode = if non_blocking {
        ReadMode::NonBlocking
    } else {
        ReadMode::Blocking
    };

    let mut read_loop = ReadLoop::new(handle, stop)
        .with_mode(mode)
        .with_buf_size(bufsize)
        .with_throttle(Duration::from_millis(delay_ms));

    // Log-and-stop: a dead device ends the dump, not the process
    if let Err(e) = read_loop.run(&mut out) {
        error!("read loop ended: {}", e);
    }
    Ok(())
}

/// Watch for connect/disconnect events until Ctrl-C.
pub fn watch(
    access: &dyn DeviceAccess,
    interval: Duration,
    stop: &AtomicBool,
) -> anyhow::Result<()> {
    info!("waiting for connect/disconnect events...");
    let stderr = io::stderr();
    let mut out = stderr.lock();
    run_watch_loop(access, stop, interval, &mut out)?;
    Ok(())
}
