//! Report read loop with cooperative cancellation

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::AccessError;
use crate::printer::write_report_hex;
use crate::types::ReadMode;
use crate::DeviceHandle;

/// Default report buffer capacity
pub const DEFAULT_BUF_SIZE: usize = 2048;

/// Default pause between reads. Paces console output only; the protocol
/// itself has no timing requirement here.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(50);

/// Pulls input reports from one open handle and hex-dumps them.
///
/// The loop owns the handle and releases it on drop, whether [`ReadLoop::run`]
/// finished cleanly, was cancelled, or bailed on a read error.
pub struct ReadLoop {
    handle: Box<dyn DeviceHandle>,
    mode: ReadMode,
    buf_size: usize,
    throttle: Duration,
    stop: Arc<AtomicBool>,
}

impl ReadLoop {
    /// Take ownership of an open handle. `stop` is checked every iteration;
    /// set it from a signal handler or another thread to end the loop.
    pub fn new(handle: Box<dyn DeviceHandle>, stop: Arc<AtomicBool>) -> Self {
        Self {
            handle,
            mode: ReadMode::Blocking,
            buf_size: DEFAULT_BUF_SIZE,
            throttle: DEFAULT_THROTTLE,
            stop,
        }
    }

    /// Select blocking or non-blocking reads (default: blocking).
    pub fn with_mode(mut self, mode: ReadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the report buffer capacity.
    pub fn with_buf_size(mut self, size: usize) -> Self {
        self.buf_size = size;
        self
    }

    /// Override the pause between reads.
    pub fn with_throttle(mut self, delay: Duration) -> Self {
        self.throttle = delay;
        self
    }

    /// Read reports until the stop flag is set or a read fails.
    ///
    /// Each report is written as one hex line. Zero-length non-blocking
    /// reads print nothing and just wait out the throttle delay. The first
    /// read error ends the loop and is returned to the caller; the handle
    /// is still released exactly once when the loop is dropped.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), AccessError> {
        self.handle.set_mode(self.mode)?;
        let mut buf = vec![0u8; self.buf_size];

        while !self.stop.load(Ordering::SeqCst) {
            let n = match self.handle.read(&mut buf) {
                Ok(n) => n,
                Err(e) => {
                    warn!("read failed on {}: {}", self.handle.summary().path, e);
                    return Err(e);
                }
            };

            if n > 0 {
                write_report_hex(out, &buf[..n])?;
            }

            std::thread::sleep(self.throttle);
        }

        debug!("read loop stopped");
        Ok(())
    }
}
