//! Engine configuration - the tuning surface of a session

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_FALL_DECREMENT_MS, DEFAULT_FALL_FLOOR_MS,
    DEFAULT_FALL_INTERVAL_MS, DEFAULT_POINTS_PER_LINE, DEFAULT_RAMP_INTERVAL_MS,
};

/// Smallest board side: the I piece needs four rows standing and four
/// columns lying down.
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest board side
pub const MAX_BOARD_SIDE: u16 = 64;

/// Errors raised while loading or validating an [`EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {axis} {value} outside {min}..={max}")]
    Dimension {
        axis: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },

    #[error("initial fall interval must be positive")]
    ZeroFallInterval,

    #[error("fall interval floor {floor_ms}ms exceeds initial interval {initial_ms}ms")]
    FloorAboveInitial { floor_ms: u32, initial_ms: u32 },

    #[error("speed ramp interval must be positive")]
    ZeroRampInterval,

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning parameters for an engine session.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub initial_fall_interval_ms: u32,
    pub fall_interval_decrement_ms: u32,
    pub fall_interval_floor_ms: u32,
    /// Wall-clock period of one speed-ramp step
    pub speed_ramp_interval_ms: u32,
    pub points_per_line: u32,
    /// Seed for the random piece source
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            initial_fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            fall_interval_decrement_ms: DEFAULT_FALL_DECREMENT_MS,
            fall_interval_floor_ms: DEFAULT_FALL_FLOOR_MS,
            speed_ramp_interval_ms: DEFAULT_RAMP_INTERVAL_MS,
            points_per_line: DEFAULT_POINTS_PER_LINE,
            seed: 1,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board_size(mut self, width: u16, height: u16) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_initial_fall_interval_ms(mut self, ms: u32) -> Self {
        self.initial_fall_interval_ms = ms;
        self
    }

    pub fn with_fall_interval_decrement_ms(mut self, ms: u32) -> Self {
        self.fall_interval_decrement_ms = ms;
        self
    }

    pub fn with_fall_interval_floor_ms(mut self, ms: u32) -> Self {
        self.fall_interval_floor_ms = ms;
        self
    }

    pub fn with_speed_ramp_interval_ms(mut self, ms: u32) -> Self {
        self.speed_ramp_interval_ms = ms;
        self
    }

    pub fn with_points_per_line(mut self, points: u32) -> Self {
        self.points_per_line = points;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Overlay values from `TETRIS_*` environment variables.
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from any key lookup (the environment in production).
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        if let Some(v) = parsed(&lookup, "TETRIS_BOARD_WIDTH") {
            self.board_width = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_BOARD_HEIGHT") {
            self.board_height = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_FALL_INTERVAL_MS") {
            self.initial_fall_interval_ms = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_FALL_DECREMENT_MS") {
            self.fall_interval_decrement_ms = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_FALL_FLOOR_MS") {
            self.fall_interval_floor_ms = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_RAMP_INTERVAL_MS") {
            self.speed_ramp_interval_ms = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_POINTS_PER_LINE") {
            self.points_per_line = v;
        }
        if let Some(v) = parsed(&lookup, "TETRIS_SEED") {
            self.seed = v;
        }
        self
    }

    /// Check every field; engines refuse to start on an invalid config
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.board_width), ("height", self.board_height)] {
            if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&value) {
                return Err(ConfigError::Dimension {
                    axis,
                    value,
                    min: MIN_BOARD_SIDE,
                    max: MAX_BOARD_SIDE,
                });
            }
        }
        if self.initial_fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.fall_interval_floor_ms > self.initial_fall_interval_ms {
            return Err(ConfigError::FloorAboveInitial {
                floor_ms: self.fall_interval_floor_ms,
                initial_ms: self.initial_fall_interval_ms,
            });
        }
        if self.speed_ramp_interval_ms == 0 {
            return Err(ConfigError::ZeroRampInterval);
        }
        Ok(())
    }

    /// Anchor column for newly spawned pieces
    pub fn spawn_column(&self) -> i16 {
        (self.board_width / 2) as i16
    }
}
