//! Turn and game state machine.
//!
//! ## Turn lifecycle
//!
//! A turn cycles `AwaitingRoll -> Rolled` while the player keeps rolling.
//! [`GreedGame::roll_dice`] throws the available dice,
//! [`GreedGame::evaluate_roll`] scores them, locks the consumed dice, and
//! accumulates the turn score (or zeroes it on a bust). [`GreedGame::bank`]
//! commits the turn score to the current player, resets the dice, and
//! passes play to the next player.
//!
//! ## Win detection
//!
//! Checked at bank time, never mid-roll. The first player in roster order
//! at or above the win score is reported as the winner; with this turn
//! model only one player's score changes per bank, so ties cannot arise in
//! normal play.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GreedError, GreedRng, Player, PlayerId, Roster};
use crate::scoring::{self, Combination};

pub mod dice;

pub use dice::{DicePool, NUM_DICE};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    #[default]
    AwaitingRoll,
    /// Dice are on the table; the player may evaluate, roll again, or bank.
    Rolled,
}

/// One evaluated roll, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// Faces of the available dice at evaluation time.
    pub faces: SmallVec<[u8; NUM_DICE]>,
    /// Points this roll scored.
    pub score: u32,
    /// Turn score after applying this roll.
    pub turn_score: u32,
}

/// Result of evaluating the current roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Points this roll scored. Zero means bust.
    pub score: u32,
    /// Dice available for the next roll after consumption.
    pub dice_available: u8,
    /// The combinations that scored.
    pub combinations: SmallVec<[Combination; 4]>,
    /// Whether the roll scored nothing, forfeiting the turn score.
    pub busted: bool,
}

/// Complete state of one game of Greed.
///
/// Construct with [`GreedGame::new`] followed by
/// [`GreedGame::add_players`], or use [`GreedGameBuilder`]. Operations that
/// touch the current player panic if no players have been added.
#[derive(Clone, Debug)]
pub struct GreedGame {
    roster: Roster,
    current: PlayerId,
    win_score: u32,
    turn_score: u32,
    roll_score: u32,
    phase: TurnPhase,
    dice: DicePool,
    rng: GreedRng,
    history: Vector<RollRecord>,
}

impl GreedGame {
    /// Create a game with an empty roster and a seeded RNG.
    #[must_use]
    pub fn new(starting_player: PlayerId, win_score: u32, seed: u64) -> Self {
        Self::with_rng(starting_player, win_score, GreedRng::new(seed))
    }

    /// Create a game with an empty roster and the given RNG.
    #[must_use]
    pub fn with_rng(starting_player: PlayerId, win_score: u32, rng: GreedRng) -> Self {
        Self {
            roster: Roster::empty(),
            current: starting_player,
            win_score,
            turn_score: 0,
            roll_score: 0,
            phase: TurnPhase::AwaitingRoll,
            dice: DicePool::new(),
            rng,
            history: Vector::new(),
        }
    }

    /// Start a new round reusing a session roster.
    ///
    /// Game scores reset to zero; games-won tallies are preserved.
    #[must_use]
    pub fn with_roster(
        mut roster: Roster,
        starting_player: PlayerId,
        win_score: u32,
        rng: GreedRng,
    ) -> Self {
        roster.reset_scores();
        let mut game = Self::with_rng(starting_player, win_score, rng);
        game.roster = roster;
        game
    }

    /// Populate the roster with `count` players.
    ///
    /// Fails with [`GreedError::NotEnoughPlayers`] for fewer than 2.
    pub fn add_players(&mut self, count: usize) -> Result<(), GreedError> {
        self.roster = Roster::new(count)?;
        Ok(())
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.roster.get(self.current)
    }

    /// ID of the player whose turn it is.
    #[must_use]
    pub const fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// Roll the available dice, returning their new faces.
    pub fn roll_dice(&mut self) -> SmallVec<[u8; NUM_DICE]> {
        let faces = self.dice.roll(&mut self.rng);
        self.phase = TurnPhase::Rolled;
        tracing::debug!("{} rolled {:?}", self.current, faces.as_slice());
        faces
    }

    /// Score the dice on the table and update the turn state.
    ///
    /// Computes the frequency distribution of the available dice, evaluates
    /// it, locks the consumed dice (hot dice restore all six), and either
    /// accumulates the turn score or zeroes it on a bust. Records the roll
    /// in the history.
    pub fn evaluate_roll(&mut self) -> RollOutcome {
        let faces = self.dice.faces();
        let score = scoring::evaluate(&self.dice.frequency());

        self.roll_score = score.total;
        self.dice.reconcile(score.dice_used);

        if score.is_bust() {
            self.turn_score = 0;
            tracing::debug!("{} busted", self.current);
        } else {
            self.turn_score += score.total;
            tracing::debug!(
                "{} scored {} (turn total {}, {} dice left)",
                self.current,
                score.total,
                self.turn_score,
                self.dice.available()
            );
        }

        self.history.push_back(RollRecord {
            player: self.current,
            faces,
            score: score.total,
            turn_score: self.turn_score,
        });

        RollOutcome {
            score: score.total,
            dice_available: self.dice.available(),
            combinations: score.combinations,
            busted: score.total == 0,
        }
    }

    /// Bank the turn score and pass the dice to the next player.
    ///
    /// Commits the accumulated turn score to the current player, resets the
    /// turn state and all six dice, and advances the current player
    /// circularly.
    pub fn bank(&mut self) {
        let banked = self.turn_score;
        let player = self.roster.get_mut(self.current);
        player.add_score(banked);
        tracing::info!(
            "{} banked {} (game score {})",
            self.current,
            banked,
            player.game_score()
        );

        self.turn_score = 0;
        self.roll_score = 0;
        self.dice.reset();
        self.phase = TurnPhase::AwaitingRoll;
        self.current = PlayerId::new(((self.current.index() + 1) % self.roster.len()) as u8);
    }

    /// Check whether any player has reached the win score.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.roster
            .iter()
            .any(|p| p.game_score() >= self.win_score)
    }

    /// The winner, if the game is over.
    ///
    /// First player in roster order at or above the win score.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.roster
            .iter()
            .find(|p| p.game_score() >= self.win_score)
            .map(Player::id)
    }

    /// Overwrite all six face values for deterministic test setups.
    ///
    /// Out-of-range values leave the corresponding die unchanged.
    pub fn set_dice(&mut self, faces: [u8; NUM_DICE]) {
        self.dice.set_faces(faces);
        self.phase = TurnPhase::Rolled;
    }

    /// Points scored by the most recent roll.
    #[must_use]
    pub const fn roll_score(&self) -> u32 {
        self.roll_score
    }

    /// Points accumulated this turn, not yet banked.
    #[must_use]
    pub const fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// The score needed to win.
    #[must_use]
    pub const fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Where the current turn stands.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The dice pool.
    #[must_use]
    pub const fn dice(&self) -> &DicePool {
        &self.dice
    }

    /// The players.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access to the players, e.g. to record a session win.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Every evaluated roll so far, oldest first.
    #[must_use]
    pub const fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// Tear the game down into its session-surviving parts.
    #[must_use]
    pub fn into_parts(self) -> (Roster, GreedRng) {
        (self.roster, self.rng)
    }
}

/// Builder for a ready-to-play [`GreedGame`].
///
/// ## Example
///
/// ```
/// use rust_greed::game::GreedGameBuilder;
///
/// let game = GreedGameBuilder::new()
///     .players(3)
///     .win_score(2000)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(game.roster().len(), 3);
/// ```
pub struct GreedGameBuilder {
    players: usize,
    win_score: u32,
    starting_player: usize,
    seed: Option<u64>,
}

impl Default for GreedGameBuilder {
    fn default() -> Self {
        Self {
            players: 2,
            win_score: 10_000,
            starting_player: 0,
            seed: None,
        }
    }
}

impl GreedGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn players(mut self, count: usize) -> Self {
        self.players = count;
        self
    }

    /// Set the score needed to win.
    #[must_use]
    pub fn win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    /// Set the starting player, 0-based.
    #[must_use]
    pub fn starting_player(mut self, index: usize) -> Self {
        self.starting_player = index;
        self
    }

    /// Seed the RNG for a deterministic game.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the game.
    ///
    /// Fails with [`GreedError::NotEnoughPlayers`] for fewer than 2
    /// players. Panics if the starting player index is out of range.
    pub fn build(self) -> Result<GreedGame, GreedError> {
        let roster = Roster::new(self.players)?;
        assert!(
            self.starting_player < self.players,
            "Starting player out of range"
        );

        let rng = match self.seed {
            Some(seed) => GreedRng::new(seed),
            None => GreedRng::from_entropy(),
        };

        Ok(GreedGame::with_roster(
            roster,
            PlayerId::new(self.starting_player as u8),
            self.win_score,
            rng,
        ))
    }
}
