//! RNG module - seeded piece generation
//!
//! Pieces are drawn cell by cell from a uniform two-color distribution. The
//! generator is a plain LCG so that a seed fully determines the piece sequence,
//! which is what makes the event log replayable.

use crate::types::{Color, Piece};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a fair coin flip
    ///
    /// The low bits of an LCG with a power-of-two modulus alternate, so the
    /// decision is taken from the top bit.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }

    /// Current generator state (feeds a new generator with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of new pieces for the queue
pub trait PieceSource {
    fn generate(&mut self) -> Piece;
}

/// Deterministic piece source backed by [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct SeededPieceSource {
    seed: u32,
    rng: SimpleRng,
}

impl SeededPieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn color(&mut self) -> Color {
        if self.rng.next_bool() {
            Color::Dark
        } else {
            Color::Light
        }
    }
}

impl PieceSource for SeededPieceSource {
    fn generate(&mut self) -> Piece {
        let top = [self.color(), self.color()];
        let bottom = [self.color(), self.color()];
        Piece::new([top, bottom])
    }
}

impl Default for SeededPieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn generate(&mut self) -> Piece {
        (**self).generate()
    }
}
