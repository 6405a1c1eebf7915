// CLI definitions using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hidprobe")]
#[command(author, version, about = "HID device enumeration and report inspection")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List attached HID devices
    #[command(visible_aliases = ["ls", "l"])]
    List {
        /// Emit the device list as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Open a device by identity and hex-dump its input reports
    #[command(visible_alias = "r")]
    Read {
        /// Vendor ID, hex (0x0e6f) or decimal
        #[arg(long, default_value = "0x0e6f", value_parser = parse_id)]
        vid: u16,

        /// Product ID, hex (0x6302) or decimal
        #[arg(long, default_value = "0x6302", value_parser = parse_id)]
        pid: u16,

        /// Only open a device with this serial number
        #[arg(long)]
        serial: Option<String>,

        /// Report buffer capacity in bytes
        #[arg(long, default_value_t = 2048)]
        bufsize: usize,

        /// Pause between reads in milliseconds (console pacing only)
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,

        /// Poll for reports instead of waiting for each one
        #[arg(long)]
        non_blocking: bool,
    },

    /// Report connect/disconnect events until interrupted
    #[command(visible_alias = "w")]
    Watch {
        /// Pause between enumeration scans in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
}

/// Accept `0x0e6f` and `3695` alike
pub fn parse_id(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid id '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_in_hex_and_decimal() {
        assert_eq!(parse_id("0x0e6f"), Ok(0x0e6f));
        assert_eq!(parse_id("0X6302"), Ok(0x6302));
        assert_eq!(parse_id("3695"), Ok(3695));
        assert!(parse_id("0xgg").is_err());
        assert!(parse_id("banana").is_err());
    }
}
