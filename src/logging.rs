//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG`, then `log.level` in the config file,
//! then `warn`. One-shot commands log to stderr. The fullscreen browser logs to
//! a file because anything written to the terminal would corrupt the screen.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::Result;
use crate::paths;

pub const DEFAULT_LEVEL: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Resolve the filter directive for this run.
pub fn filter_directive(config: &Config) -> String {
    if let Ok(directive) = std::env::var(EnvFilter::DEFAULT_ENV)
        && !directive.trim().is_empty()
    {
        return directive;
    }
    config
        .log
        .level
        .clone()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &Config, target: LogTarget) -> Result<()> {
    let filter = build_filter(&filter_directive(config));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init();
        }
        LogTarget::File => {
            let path = paths::log_path();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init();
        }
    }
    Ok(())
}
