//! hidprobe CLI
//!
//! Lists attached HID devices, dumps raw input reports from one of them,
//! or watches for connect/disconnect events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use hidprobe_access::HidAccess;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let access = HidAccess::new();

    // Ctrl-C flips the stop flag; the loops check it each iteration
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))?;
    }

    match cli.command {
        None | Some(Commands::List { json: false }) => commands::list(&access, false)?,
        Some(Commands::List { json: true }) => commands::list(&access, true)?,
        Some(Commands::Read {
            vid,
            pid,
            serial,
            bufsize,
            delay_ms,
            non_blocking,
        }) => {
            commands::read(
                &access,
                vid,
                pid,
                serial.as_deref(),
                bufsize,
                delay_ms,
                non_blocking,
                stop,
            )?;
        }
        Some(Commands::Watch { interval_ms }) => {
            commands::watch(&access, Duration::from_millis(interval_ms), &stop)?;
        }
    }

    Ok(())
}
