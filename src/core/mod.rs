//! Core types: dice, players, RNG, and errors.

pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use die::Die;
pub use error::{GreedError, Result};
pub use player::{Player, PlayerId, Roster};
pub use rng::{GreedRng, GreedRngState};
