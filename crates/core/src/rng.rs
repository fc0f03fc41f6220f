//! RNG module - deterministic color generation
//!
//! Every random decision in a game (preview colors, initial balls, spawn cells)
//! goes through one xorshift32 generator owned by the game, so a seed fully
//! determines a session.

use crate::types::{Cell, COLOR_COUNT, ZERO_SEED_SUBSTITUTE};

/// Xorshift32 RNG (Marsaglia 13/17/5 triple)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: 0 };
        rng.seed(seed);
        rng
    }

    /// Reset the state. A zero seed maps to a fixed non-zero constant,
    /// since zero is a fixed point of xorshift.
    pub fn seed(&mut self, seed: u32) {
        self.state = if seed == 0 { ZERO_SEED_SUBSTITUTE } else { seed };
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate random value in range [0, upper). Returns 0 when `upper == 0`.
    pub fn next_range(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.next_u32() % upper
    }

    /// Draw a ball color uniformly from `1..=COLOR_COUNT`
    pub fn next_color(&mut self) -> Cell {
        self.next_range(COLOR_COUNT as u32) as Cell + 1
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for XorShiftRng {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = XorShiftRng::new(12345);
        let mut rng2 = XorShiftRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
            assert_eq!(rng1.next_range(81), rng2.next_range(81));
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = XorShiftRng::new(12345);
        let mut rng2 = XorShiftRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_known_sequence() {
        // x = 1: x ^= x << 13 -> 0x2001; x ^= x >> 17 -> 0x2001; x ^= x << 5 -> 0x42021
        let mut rng = XorShiftRng::new(1);
        assert_eq!(rng.next_u32(), 0x0004_2021);
        assert_eq!(rng.state(), 0x0004_2021);
    }

    #[test]
    fn test_rng_zero_seed_substitution() {
        let mut zero = XorShiftRng::new(0);
        let mut substitute = XorShiftRng::new(ZERO_SEED_SUBSTITUTE);
        assert_eq!(zero.state(), ZERO_SEED_SUBSTITUTE);

        for _ in 0..32 {
            assert_eq!(zero.next_u32(), substitute.next_u32());
        }
    }

    #[test]
    fn test_rng_range_zero_upper() {
        let mut rng = XorShiftRng::new(7);
        let before = rng.state();
        assert_eq!(rng.next_range(0), 0);
        // Degenerate draws do not advance the state.
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_rng_colors_in_range() {
        let mut rng = XorShiftRng::new(99);
        for _ in 0..1000 {
            let c = rng.next_color();
            assert!((1..=COLOR_COUNT).contains(&c));
        }
    }
}
