//! Player identification and score bookkeeping.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, 0-based.
//!
//! ## Roster
//!
//! Fixed-membership collection of players. A game of Greed needs at least
//! two players; `Roster::new` enforces that. Game scores reset between
//! rounds, games-won tallies survive for the session.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GreedError;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One player: identity, score in the current game, games won this session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: Option<String>,
    game_score: u32,
    games_won: u32,
}

impl Player {
    /// Create a new player with zero score.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: None,
            game_score: 0,
            games_won: 0,
        }
    }

    /// Get the player's ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the display name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get the cumulative score in the current game.
    #[must_use]
    pub const fn game_score(&self) -> u32 {
        self.game_score
    }

    /// Add banked points to the game score.
    pub fn add_score(&mut self, points: u32) {
        self.game_score += points;
    }

    /// Get how many games this player has won this session.
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Record a game win.
    pub fn record_win(&mut self) {
        self.games_won += 1;
    }
}

/// Ordered, fixed-membership collection of players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster of `count` players with sequential IDs and zero
    /// scores.
    ///
    /// Fails with [`GreedError::NotEnoughPlayers`] for fewer than 2 players.
    pub fn new(count: usize) -> Result<Self, GreedError> {
        if count < 2 {
            return Err(GreedError::NotEnoughPlayers(count));
        }

        let players = (0..count as u8)
            .map(|i| Player::new(PlayerId(i)))
            .collect();

        Ok(Self { players })
    }

    /// A roster with no players yet; populated via `GreedGame::add_players`.
    pub(crate) fn empty() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check whether the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player by ID.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Iterate over players in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Reset all game scores to zero for a new round.
    ///
    /// Games-won tallies are preserved.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.game_score = 0;
        }
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        self.get_mut(id)
    }
}
