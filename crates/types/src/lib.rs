//! Shared types module - shape ids, colors, input intents and tuning defaults
//!
//! Everything here is plain data with no behavior beyond lookups, so the
//! engine, the input mapper and the terminal view can all agree on it.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Columns grow to the right,
//! rows grow downward, and row 0 is the topmost visible row. Negative rows are
//! the space above the board where new pieces appear.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_INTERVAL_MS` | 500 | Time between gravity steps at session start |
//! | `DEFAULT_FALL_DECREMENT_MS` | 5 | Amount the fall interval shrinks per ramp step |
//! | `DEFAULT_FALL_FLOOR_MS` | 150 | Fall interval never drops below this |
//! | `DEFAULT_RAMP_INTERVAL_MS` | 5000 | Wall-clock period of one ramp step |
//! | `DEFAULT_POINTS_PER_LINE` | 10 | Flat score per cleared row |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Intent, ShapeId, BOARD_WIDTH};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(ShapeId::O.color(), ShapeId::O.color());
//! assert_eq!(Intent::from_str("rotate"), Some(Intent::Rotate));
//! assert_eq!(Intent::from_str("hold"), None);
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u16 = 20;

/// Host loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval at session start
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 500;

/// Fall interval reduction applied at each speed-ramp step
pub const DEFAULT_FALL_DECREMENT_MS: u32 = 5;

/// Lowest fall interval the speed ramp can reach
pub const DEFAULT_FALL_FLOOR_MS: u32 = 150;

/// Wall-clock time between speed-ramp steps
pub const DEFAULT_RAMP_INTERVAL_MS: u32 = 5000;

/// Points awarded per cleared row; no bonus for clearing several at once
pub const DEFAULT_POINTS_PER_LINE: u32 = 10;

/// Row at which new pieces are anchored.
///
/// Every shape's offsets point upward from the anchor, so a piece spawned here
/// sits entirely above the visible board.
pub const SPAWN_ROW: i16 = 0;

/// A lock that leaves any cell on a row below this value ends the session.
///
/// With a threshold of 1, a locked cell on the top visible row is a loss.
pub const LOSS_ROW_THRESHOLD: i16 = 1;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the board (`None` = empty, `Some` = locked with that color)
pub type Cell = Option<Rgb>;

/// The seven piece kinds, in catalog order.
///
/// Each kind has a fixed color:
/// - **S**: green
/// - **Z**: red
/// - **I**: cyan
/// - **O**: yellow
/// - **J**: orange
/// - **L**: blue
/// - **T**: purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl ShapeId {
    /// All shapes in catalog order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::S,
        ShapeId::Z,
        ShapeId::I,
        ShapeId::O,
        ShapeId::J,
        ShapeId::L,
        ShapeId::T,
    ];

    /// Position of this shape in [`ShapeId::ALL`]
    pub fn index(self) -> usize {
        match self {
            ShapeId::S => 0,
            ShapeId::Z => 1,
            ShapeId::I => 2,
            ShapeId::O => 3,
            ShapeId::J => 4,
            ShapeId::L => 5,
            ShapeId::T => 6,
        }
    }

    /// Look up a shape by catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`. An out-of-range shape index is a caller bug.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::ALL.len(), "shape index {index} out of range");
        Self::ALL[index]
    }

    /// Fixed color of this shape
    pub fn color(self) -> Rgb {
        match self {
            ShapeId::S => Rgb::new(0, 255, 0),
            ShapeId::Z => Rgb::new(255, 0, 0),
            ShapeId::I => Rgb::new(0, 255, 255),
            ShapeId::O => Rgb::new(255, 255, 0),
            ShapeId::J => Rgb::new(255, 165, 0),
            ShapeId::L => Rgb::new(0, 0, 255),
            ShapeId::T => Rgb::new(128, 0, 128),
        }
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("L"), Some(ShapeId::L));
    /// assert_eq!(ShapeId::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            "t" => Some(ShapeId::T),
            _ => None,
        }
    }

    /// Single uppercase letter, used by the side panel and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::S => "S",
            ShapeId::Z => "Z",
            ShapeId::I => "I",
            ShapeId::O => "O",
            ShapeId::J => "J",
            ShapeId::L => "L",
            ShapeId::T => "T",
        }
    }
}

/// Discrete player intents consumed by the engine.
///
/// Anything a host cannot express as one of these is ignored before it reaches
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Move the active piece one row down
    SoftDrop,
    /// Advance to the next rotation state in place
    Rotate,
}

impl Intent {
    /// Parse an intent name (case-insensitive).
    ///
    /// Accepts the camelCase names plus short aliases. Unknown names return
    /// `None`, which callers treat as "ignore".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("down"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" | "left" => Some(Intent::MoveLeft),
            "moveright" | "right" => Some(Intent::MoveRight),
            "softdrop" | "down" => Some(Intent::SoftDrop),
            "rotate" | "up" => Some(Intent::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}
