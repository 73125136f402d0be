//! RNG module - where new pieces come from
//!
//! The engine only asks a [`PieceSource`] for the next shape. Two sources ship:
//!
//! - [`RandomPieces`]: each shape drawn uniformly and independently, driven by
//!   a seeded LCG so a seed always replays the same game.
//! - [`FixedSequence`]: cycles a given list, for scripted and test sessions.

use crate::types::ShapeId;

/// Produces the shape of each newly drawn piece
pub trait PieceSource {
    fn next_shape(&mut self) -> ShapeId;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_shape(&mut self) -> ShapeId {
        (**self).next_shape()
    }
}

/// Linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 maps to 1.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Value in `0..bound`, using the high bits (the low bits of an LCG cycle
    /// with short periods)
    pub fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random shapes
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_shape(&mut self) -> ShapeId {
        ShapeId::from_index(self.rng.next_below(ShapeId::ALL.len() as u32) as usize)
    }
}

/// Cycles through a fixed list of shapes
#[derive(Debug, Clone)]
pub struct FixedSequence {
    shapes: Vec<ShapeId>,
    cursor: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// Panics if `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<ShapeId>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "fixed piece sequence must not be empty");
        Self { shapes, cursor: 0 }
    }

    /// The same shape forever
    pub fn repeat(shape: ShapeId) -> Self {
        Self::new(vec![shape])
    }
}

impl PieceSource for FixedSequence {
    fn next_shape(&mut self) -> ShapeId {
        let shape = self.shapes[self.cursor];
        self.cursor = (self.cursor + 1) % self.shapes.len();
        shape
    }
}
