//! Tracing subscriber setup.
//!
//! stdout belongs to the game screen, so logs go to the file named by
//! `TETRIS_LOG_PATH`. The filter comes from `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_ENV: &str = "TETRIS_LOG_PATH";

/// Where logs go when `TETRIS_LOG_PATH` is unset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Install nothing
    Discard,
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns false when nothing was installed.
pub fn init(fallback: Fallback) -> Result<bool> {
    if let Some(path) = std::env::var_os(LOG_PATH_ENV) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow!(e))?;
        return Ok(true);
    }

    match fallback {
        Fallback::Discard => Ok(false),
        Fallback::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(true)
        }
    }
}
