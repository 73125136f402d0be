//! Command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::core::EngineConfig;
use crate::types::TICK_MS;

/// tui-blockfall - falling-block puzzle in the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the random piece source
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Board width in cells
    #[arg(long, global = true)]
    pub width: Option<u16>,

    /// Board height in cells
    #[arg(long, global = true)]
    pub height: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal (default)
    Play,
    /// Run without a terminal and print the final snapshot as JSON
    Headless(HeadlessArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct HeadlessArgs {
    /// Stop after this many ticks
    #[arg(long, default_value_t = 1000)]
    pub ticks: u32,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = TICK_MS)]
    pub step_ms: u32,

    /// Intents applied one per tick, e.g. `left,rotate,down`
    #[arg(long, value_delimiter = ',')]
    pub intents: Vec<String>,
}

impl Cli {
    /// Build the engine config: defaults, then the config file, then
    /// `TETRIS_*` variables, then flags.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => EngineConfig::default(),
        };
        let config = self.apply_flags(config.apply_env());
        config.validate().context("invalid engine config")?;
        Ok(config)
    }

    fn apply_flags(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        config
    }
}
