//! Logging setup
//!
//! Uses `tracing-subscriber` with an `EnvFilter`, so `RUST_LOG` always
//! overrides the defaults below.

use crate::error::{CalcTuiError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter when logging to a file
pub const FILE_FILTER: &str = "info";

/// Default filter when logging to stderr; keeps headless output clean
pub const STDERR_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The TUI owns the terminal and no file was given
    Discard,
}

impl LogTarget {
    /// Pick a target from the `--log-file` flag and the run mode
    pub fn select(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Discard,
            None => Self::Stderr,
        }
    }

    fn default_filter(&self) -> &'static str {
        match self {
            Self::File(_) | Self::Discard => FILE_FILTER,
            Self::Stderr => STDERR_FILTER,
        }
    }
}

/// Install the global tracing subscriber
pub fn init_logger(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| CalcTuiError::general(format!("Failed to initialize logging: {}", e)))
}
