//! Engine module - one play session
//!
//! The engine owns the board, the active and next pieces, the score and both
//! timers. Each [`Engine::tick`] applies the intents collected since the last
//! tick in arrival order, then checks gravity. A gravity step that cannot move
//! the piece down locks it, which runs the rest of the cycle in the same call:
//!
//! ```text
//! Spawning -> Falling -> Locking -> LineClearing -> Spawning -> ...
//!                           |
//!                           +-> GameOver (locked cell on a row < LOSS_ROW_THRESHOLD)
//! ```
//!
//! A spawn whose position is already blocked also ends the session. Once the
//! session is over, ticks and intents are ignored until [`Engine::reset`].

use serde::Serialize;

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{line_clear_points, SpeedRamp};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{Intent, LOSS_ROW_THRESHOLD, SPAWN_ROW};

/// Where the engine is in the piece life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    /// The piece as it was when it locked
    pub piece: ActiveSnapshot,
    /// Spawn counter value of the locked piece
    pub piece_id: u32,
    /// Cells written to the board (cells above the board are dropped)
    pub cells_locked: u32,
    pub lines_cleared: u32,
    pub points: u32,
    /// The lock (or the spawn after it) ended the session
    pub game_over: bool,
}

/// A play session
#[derive(Debug, Clone)]
pub struct Engine<S = RandomPieces> {
    config: EngineConfig,
    board: Board,
    active: Option<Piece>,
    next: Piece,
    source: S,
    phase: Phase,
    score: u32,
    lines: u32,
    fall_timer_ms: u32,
    ramp: SpeedRamp,
    /// Pieces spawned this session
    piece_id: u32,
    /// Incremented by every reset
    episode_id: u32,
}

impl Engine<RandomPieces> {
    /// Start a session with uniformly random pieces seeded from the config
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let source = RandomPieces::new(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: PieceSource> Engine<S> {
    /// Start a session drawing pieces from `source`
    pub fn with_source(config: EngineConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let first = Piece::new(source.next_shape(), config.spawn_column(), SPAWN_ROW);
        let mut engine = Self {
            board: Board::new(config.board_width, config.board_height),
            active: None,
            next: first,
            source,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            ramp: ramp_for(&config),
            piece_id: 0,
            episode_id: 0,
            config,
        };
        engine.spawn_piece();
        Ok(engine)
    }

    /// Throw the session away and start a fresh one with the same config.
    ///
    /// The piece source keeps its position, so a seeded game continues its
    /// sequence rather than replaying it.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.active = None;
        self.next = self.draw_next();
        self.score = 0;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.ramp = ramp_for(&self.config);
        self.piece_id = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        tracing::info!(episode_id = self.episode_id, "session reset");
        self.spawn_piece();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups.
    ///
    /// Writes here skip placement validation; keep them clear of the active
    /// piece.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.ramp.fall_interval_ms()
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Advance the session by `elapsed_ms`.
    ///
    /// Intents are applied in order before gravity is checked. Returns the
    /// lock event if a piece locked during this tick.
    pub fn tick(&mut self, elapsed_ms: u32, intents: &[Intent]) -> Option<LockEvent> {
        if self.phase == Phase::GameOver {
            return None;
        }

        if self.ramp.advance(elapsed_ms) {
            tracing::info!(
                fall_interval_ms = self.ramp.fall_interval_ms(),
                "fall interval shortened"
            );
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);

        for &intent in intents {
            self.apply_intent(intent);
        }

        if self.fall_timer_ms <= self.ramp.fall_interval_ms() {
            return None;
        }
        self.fall_timer_ms = 0;

        if self.try_move(0, 1) {
            return None;
        }
        self.lock_piece()
    }

    /// Apply one intent immediately. Returns false if it was rejected.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let applied = match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::SoftDrop => self.try_move(0, 1),
            Intent::Rotate => self.try_rotate(),
        };
        if !applied {
            tracing::trace!(intent = intent.as_str(), "intent rejected");
        }
        applied
    }

    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.moved(dx, dy))
    }

    /// Next rotation state at the same anchor; no alternative offsets are tried
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.rotated())
    }

    fn try_replace(&mut self, candidate: Piece) -> bool {
        if !candidate.is_valid(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Commit the active piece, check for loss, clear rows and spawn the next
    fn lock_piece(&mut self) -> Option<LockEvent> {
        let piece = self.active.take()?;
        let piece_id = self.piece_id;

        self.phase = Phase::Locking;
        let cells_locked = self.board.lock_cells(piece.colored_cells()) as u32;
        tracing::debug!(
            shape = piece.shape.as_str(),
            x = piece.x,
            y = piece.y,
            rotation = piece.rotation,
            cells_locked,
            "piece locked"
        );

        let mut event = LockEvent {
            piece: piece.into(),
            piece_id,
            cells_locked,
            lines_cleared: 0,
            points: 0,
            game_over: false,
        };

        if self.board.has_cell_above(LOSS_ROW_THRESHOLD) {
            self.phase = Phase::GameOver;
            tracing::info!(
                score = self.score,
                lines = self.lines,
                "game over: stack reached the top"
            );
            event.game_over = true;
            return Some(event);
        }

        self.phase = Phase::LineClearing;
        let cleared = self.board.clear_full_rows();
        let points = line_clear_points(cleared, self.config.points_per_line);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        if cleared > 0 {
            tracing::info!(cleared, points, score = self.score, "rows cleared");
        }
        event.lines_cleared = cleared as u32;
        event.points = points;

        event.game_over = !self.spawn_piece();
        Some(event)
    }

    /// Promote the next piece to active and draw a new next piece
    fn spawn_piece(&mut self) -> bool {
        self.phase = Phase::Spawning;

        let candidate = Piece::new(self.next.shape, self.config.spawn_column(), SPAWN_ROW);
        self.next = self.draw_next();

        if !candidate.is_valid(&self.board) {
            self.phase = Phase::GameOver;
            tracing::info!(
                shape = candidate.shape.as_str(),
                score = self.score,
                "game over: spawn position blocked"
            );
            return false;
        }

        self.active = Some(candidate);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.phase = Phase::Falling;
        tracing::debug!(
            piece_id = self.piece_id,
            shape = candidate.shape.as_str(),
            next = self.next.shape.as_str(),
            "piece spawned"
        );
        true
    }

    fn draw_next(&mut self) -> Piece {
        Piece::new(
            self.source.next_shape(),
            self.config.spawn_column(),
            SPAWN_ROW,
        )
    }

    /// Fill `out` with the current render state, reusing its grid allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());

        if let Some(active) = self.active {
            let color = active.color();
            for (x, y) in active.cells() {
                if x >= 0 && y >= 0 && x < out.width as i16 && y < out.height as i16 {
                    out.grid[y as usize * out.width as usize + x as usize] = Some(color);
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = NextSnapshot {
            shape: self.next.shape,
            rotation: self.next.rotation,
        };
        out.score = self.score;
        out.lines = self.lines;
        out.fall_interval_ms = self.ramp.fall_interval_ms();
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn ramp_for(config: &EngineConfig) -> SpeedRamp {
    SpeedRamp::new(
        config.initial_fall_interval_ms,
        config.speed_ramp_interval_ms,
        config.fall_interval_decrement_ms,
        config.fall_interval_floor_ms,
    )
}
