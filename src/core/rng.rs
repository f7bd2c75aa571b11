//! Deterministic random number generation for dice rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Injectable**: The game owns one `GreedRng`; tests construct it with
//!   a fixed seed instead of relying on ambient randomness
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rust_greed::core::GreedRng;
//!
//! let mut rng = GreedRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same sequence
//! let mut rng2 = GreedRng::new(42);
//! assert_eq!(rng2.roll_face(), face);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GreedRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GreedRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.gen();
        Self::new(seed)
    }

    /// Roll a single die face, uniformly in 1..=6.
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GreedRngState {
        GreedRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GreedRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GreedRng::new(42);
        let mut rng2 = GreedRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(), rng2.roll_face());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GreedRng::new(1);
        let mut rng2 = GreedRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_face()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GreedRng::new(7);

        for _ in 0..1000 {
            let face = rng.roll_face();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_all_faces_reachable() {
        let mut rng = GreedRng::new(0);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            seen[(rng.roll_face() - 1) as usize] = true;
        }

        assert_eq!(seen, [true; 6]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GreedRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.roll_face();
        }

        // Save state
        let state = rng.state();

        // Continue generating
        let expected: Vec<_> = (0..10).map(|_| rng.roll_face()).collect();

        // Restore and verify
        let mut restored = GreedRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_face()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GreedRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GreedRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
