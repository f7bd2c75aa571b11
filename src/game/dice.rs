//! The six-dice pool and its availability accounting.
//!
//! Availability is tracked two ways at once: each [`Die`] carries a flag,
//! and the pool keeps an aggregate counter. The scoring engine reports how
//! many dice a roll consumed as a plain count; [`DicePool::reconcile`]
//! brings the flags back in line with the counter by locking dice in
//! forward-scan order. When the counter reaches zero every die scored, and
//! the whole pool becomes available again ("hot dice").

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Die, GreedRng};
use crate::scoring::RollFrequency;

/// Number of dice in a game of Greed.
pub const NUM_DICE: usize = 6;

/// The six dice plus the aggregate availability counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    dice: [Die; NUM_DICE],
    available: u8,
}

impl DicePool {
    /// Create a pool of six fresh dice, all available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dice: [Die::new(); NUM_DICE],
            available: NUM_DICE as u8,
        }
    }

    /// How many dice are available for the next roll.
    #[must_use]
    pub const fn available(&self) -> u8 {
        self.available
    }

    /// Roll every available die, returning the new faces in die order.
    pub fn roll(&mut self, rng: &mut GreedRng) -> SmallVec<[u8; NUM_DICE]> {
        self.dice
            .iter_mut()
            .filter(|d| d.is_available())
            .map(|d| d.roll(rng))
            .collect()
    }

    /// Faces of the available dice, in die order.
    #[must_use]
    pub fn faces(&self) -> SmallVec<[u8; NUM_DICE]> {
        self.dice
            .iter()
            .filter(|d| d.is_available())
            .map(|d| d.face())
            .collect()
    }

    /// Frequency distribution of the available dice.
    #[must_use]
    pub fn frequency(&self) -> RollFrequency {
        RollFrequency::from_faces(&self.faces())
    }

    /// Overwrite all six face values for deterministic test setups.
    ///
    /// Each die applies its own leniency rule: out-of-range values leave
    /// that die's face unchanged. Availability flags are untouched.
    pub fn set_faces(&mut self, faces: [u8; NUM_DICE]) {
        for (die, face) in self.dice.iter_mut().zip(faces) {
            die.set_face(face);
        }
    }

    /// Reconcile die-level availability flags after a roll consumed dice.
    ///
    /// The new availability target is the previous counter minus
    /// `consumed`, clamped at zero. A target of zero means every die
    /// scored: all six become available again and the counter resets to
    /// six. Otherwise, the excess flagged dice are locked in forward-scan
    /// order, lowest index first, so the outcome is reproducible for a
    /// given die ordering.
    pub fn reconcile(&mut self, consumed: u8) {
        let target = self.available.saturating_sub(consumed);

        if target == 0 {
            self.reset();
            return;
        }

        let flagged = self.dice.iter().filter(|d| d.is_available()).count() as u8;
        let mut to_lock = flagged.saturating_sub(target);

        for die in &mut self.dice {
            if to_lock == 0 {
                break;
            }
            if die.is_available() {
                die.set_available(false);
                to_lock -= 1;
            }
        }

        self.available = target;
    }

    /// Make all six dice available again, e.g. at a turn boundary.
    pub fn reset(&mut self) {
        self.available = NUM_DICE as u8;
        for die in &mut self.dice {
            die.set_available(true);
        }
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool() {
        let pool = DicePool::new();

        assert_eq!(pool.available(), 6);
        assert_eq!(pool.faces().as_slice(), &[1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_roll_only_available() {
        let mut rng = GreedRng::new(42);
        let mut pool = DicePool::new();

        pool.reconcile(2); // lock two dice
        let faces = pool.roll(&mut rng);

        assert_eq!(faces.len(), 4);
        assert_eq!(pool.available(), 4);
    }

    #[test]
    fn test_set_faces() {
        let mut pool = DicePool::new();

        pool.set_faces([2, 2, 2, 5, 5, 5]);

        assert_eq!(pool.faces().as_slice(), &[2, 2, 2, 5, 5, 5]);
        assert_eq!(pool.frequency().count(2), 3);
        assert_eq!(pool.frequency().count(5), 3);
    }

    #[test]
    fn test_set_faces_lenient() {
        let mut pool = DicePool::new();
        pool.set_faces([2, 3, 4, 5, 6, 1]);

        // Out-of-range values leave the individual die unchanged.
        pool.set_faces([0, 9, 4, 5, 6, 1]);

        assert_eq!(pool.faces().as_slice(), &[2, 3, 4, 5, 6, 1]);
    }

    #[test]
    fn test_reconcile_locks_forward() {
        let mut pool = DicePool::new();
        pool.set_faces([1, 2, 3, 4, 5, 6]);

        pool.reconcile(2);

        // The two lowest-indexed dice are locked.
        assert_eq!(pool.available(), 4);
        assert_eq!(pool.faces().as_slice(), &[3, 4, 5, 6]);
    }

    #[test]
    fn test_reconcile_repeated() {
        let mut pool = DicePool::new();
        pool.set_faces([1, 2, 3, 4, 5, 6]);

        pool.reconcile(1);
        assert_eq!(pool.faces().as_slice(), &[2, 3, 4, 5, 6]);

        pool.reconcile(2);
        assert_eq!(pool.faces().as_slice(), &[4, 5, 6]);
        assert_eq!(pool.available(), 3);
    }

    #[test]
    fn test_reconcile_zero_consumed() {
        let mut pool = DicePool::new();

        pool.reconcile(0);

        assert_eq!(pool.available(), 6);
        assert_eq!(pool.faces().len(), 6);
    }

    #[test]
    fn test_hot_dice_on_exact_consumption() {
        let mut pool = DicePool::new();

        pool.reconcile(6);

        assert_eq!(pool.available(), 6);
        assert_eq!(pool.faces().len(), 6);
    }

    #[test]
    fn test_hot_dice_clamps_over_consumption() {
        let mut pool = DicePool::new();
        pool.reconcile(4);
        assert_eq!(pool.available(), 2);

        // Consuming more than remains clamps to zero and resets.
        pool.reconcile(5);

        assert_eq!(pool.available(), 6);
        assert_eq!(pool.faces().len(), 6);
    }

    #[test]
    fn test_reset() {
        let mut pool = DicePool::new();
        pool.reconcile(3);

        pool.reset();

        assert_eq!(pool.available(), 6);
        assert_eq!(pool.faces().len(), 6);
    }

    #[test]
    fn test_availability_bounds() {
        let mut pool = DicePool::new();

        for consumed in [1u8, 2, 3, 4, 5, 6, 7] {
            pool.reconcile(consumed);
            assert!(pool.available() <= 6);
        }
    }
}
