//! # rust-greed
//!
//! A turn-based dice scoring game engine for the Game of Greed, a
//! Farkle/10000 variant for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: All per-game counters (roll score, turn score,
//!    dice availability) live on a passed-around [`game::GreedGame`], never
//!    in globals.
//!
//! 2. **Injectable randomness**: The game owns a seedable
//!    [`core::GreedRng`]; tests fix the seed or overwrite faces directly
//!    via [`game::GreedGame::set_dice`].
//!
//! 3. **Pure scoring**: [`scoring::evaluate`] maps a frequency
//!    distribution of faces to points and a consumed-dice count with no
//!    side effects; the dice pool reconciles availability afterwards.
//!
//! ## Modules
//!
//! - `core`: dice, players, RNG, errors
//! - `scoring`: roll evaluation over face frequencies
//! - `game`: the dice pool and the turn/game state machine
//!
//! ## Example
//!
//! ```
//! use rust_greed::game::GreedGameBuilder;
//!
//! let mut game = GreedGameBuilder::new()
//!     .players(2)
//!     .win_score(1000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! game.roll_dice();
//! let outcome = game.evaluate_roll();
//! if !outcome.busted {
//!     game.bank();
//! }
//! ```

pub mod core;
pub mod game;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Die, GreedError, GreedRng, GreedRngState, Player, PlayerId, Result, Roster};

pub use crate::scoring::{evaluate, Combination, RollFrequency, RollScore};

pub use crate::game::{
    DicePool, GreedGame, GreedGameBuilder, RollOutcome, RollRecord, TurnPhase, NUM_DICE,
};
