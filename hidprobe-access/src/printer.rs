//! Human-readable output for device lists and report dumps
//!
//! Everything writes against `io::Write` so tests can capture the exact
//! bytes instead of scraping a console.

use std::io::{self, Write};

use crate::error::AccessError;
use crate::types::DeviceSummary;
use crate::DeviceHandle;

/// Separator printed under each device entry
const SEPARATOR: &str = "---------------------------------------------";

/// Print the enumeration result: a header, then one numbered entry plus
/// separator line per device. An empty list prints the header only.
pub fn print_device_list<W: Write>(out: &mut W, devices: &[DeviceSummary]) -> io::Result<()> {
    writeln!(out, "Devices:")?;
    writeln!(out)?;
    for (i, dev) in devices.iter().enumerate() {
        writeln!(out, "{}.\t{}", i, dev)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

/// Dump one input report as two-digit lowercase hex, one byte per token,
/// each followed by a space, then a newline.
pub fn write_report_hex<W: Write>(out: &mut W, report: &[u8]) -> io::Result<()> {
    for b in report {
        write!(out, "{:02x} ", b)?;
    }
    writeln!(out)
}

/// Print the three descriptor strings of an open handle, in the order the
/// read command shows them before dumping reports.
pub fn print_device_strings<W: Write>(
    out: &mut W,
    handle: &dyn DeviceHandle,
) -> Result<(), AccessError> {
    writeln!(
        out,
        "Manufacturer: {}",
        handle.manufacturer()?.unwrap_or_default()
    )?;
    writeln!(out, "Product: {}", handle.product()?.unwrap_or_default())?;
    writeln!(
        out,
        "Serial Number: {}",
        handle.serial_number()?.unwrap_or_default()
    )?;
    Ok(())
}
