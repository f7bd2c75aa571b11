//! A single six-sided die with an availability flag.
//!
//! Dice that scored in an earlier roll of the same turn are flagged
//! unavailable; only available dice participate in the next roll.

use serde::{Deserialize, Serialize};

use super::rng::GreedRng;

/// Maximum face value.
const MAX_FACE: u8 = 6;

/// One die: a face value in 1..=6 and an availability flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    face: u8,
    available: bool,
}

impl Die {
    /// Create a die showing face 1, available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            face: 1,
            available: true,
        }
    }

    /// Roll the die, assigning a uniformly random face in 1..=6.
    ///
    /// Returns the new face value.
    pub fn roll(&mut self, rng: &mut GreedRng) -> u8 {
        self.face = rng.roll_face();
        self.face
    }

    /// Get the current face value.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.face
    }

    /// Set the face value.
    ///
    /// Out-of-range values are silently ignored. Deterministic test setups
    /// rely on this leniency.
    pub fn set_face(&mut self, value: u8) {
        if value > 0 && value <= MAX_FACE {
            self.face = value;
        }
    }

    /// Check whether the die participates in the current roll.
    #[must_use]
    pub const fn is_available(self) -> bool {
        self.available
    }

    /// Set the availability flag.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face)
    }
}
