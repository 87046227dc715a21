//! Tracing initialization.
//! One compact fmt layer behind an EnvFilter, writing to stderr.
//!
//! Behavior:
//! - The filter comes from LogLevel alone; RUST_LOG is not consulted.
//! - Diagnostics go to stderr only: stdout belongs to the rename log, which
//!   scripts may parse.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use tidypath::LogLevel;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn env_filter_for(lvl: &LogLevel) -> EnvFilter {
    let directive = match lvl {
        LogLevel::Quiet => "error",
        LogLevel::Normal => "info",
        LogLevel::Info => "debug",
        LogLevel::Debug => "trace",
    };
    EnvFilter::new(directive)
}

/// Initialize tracing for the given verbosity. Fails if a global subscriber
/// is already set.
pub fn init_tracing(lvl: &LogLevel) -> Result<()> {
    let stderr_layer = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(true)
        .compact()
        .with_writer(std::io::stderr);
    registry()
        .with(env_filter_for(lvl))
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}
