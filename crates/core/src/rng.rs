//! RNG module - seeded uniform piece selection
//!
//! Piece kinds are independent uniform draws over the seven shapes; there
//! is no bag or repeat-avoidance. A small LCG keeps the stream deterministic
//! for a given seed, which tests and benches rely on.

use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform piece-kind source
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    /// Create a new piece source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniform over the seven shapes
    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as u8;
        PieceKind::from_index(index).unwrap_or(PieceKind::I)
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
