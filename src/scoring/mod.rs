//! Roll evaluation: combinations, scores, and dice consumption.
//!
//! The scoring engine is a pure function from a [`RollFrequency`] (how many
//! available dice show each face) to a [`RollScore`]. Every matching
//! combination contributes its points to the total and its dice to an
//! aggregate consumed count; no die is ever attributed to two combinations
//! because the conditions are structurally exclusive per face.
//!
//! ## Combinations
//!
//! | Combination     | Condition                        | Score                          |
//! |-----------------|----------------------------------|--------------------------------|
//! | Straight        | every face exactly once          | 1200                           |
//! | Three pairs     | exactly three faces twice        | 800                            |
//! | Six of a kind   | one face six times               | 8000 for 1s, else face×100×8   |
//! | Five of a kind  | one face five times              | 4000 for 1s, else face×100×4   |
//! | Four of a kind  | one face four times              | 2000 for 1s, else face×100×2   |
//! | Three of a kind | one face three times             | 1000 for 1s, else face×100     |
//! | Single 1s       | one or two 1s, no straight/pairs | 100 per die                    |
//! | Single 5s       | one or two 5s, no straight/pairs | 50 per die                     |
//!
//! A roll matching nothing scores zero: a **bust**, forfeiting the turn's
//! accumulated score.
//!
//! Consumption is tracked as an aggregate count, not per die. The caller
//! reconciles it against die-level availability flags (see
//! [`crate::game::DicePool::reconcile`]), clamping at zero and restoring
//! all six dice when every die scored ("hot dice").

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Frequency distribution of face values among the available dice.
///
/// Index 0 holds the count of 1s, index 5 the count of 6s. Counts sum to at
/// most six. Rebuilt for every evaluation, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollFrequency([u8; 6]);

impl RollFrequency {
    /// Build a frequency distribution from rolled faces.
    ///
    /// Values outside 1..=6 are ignored.
    #[must_use]
    pub fn from_faces(faces: &[u8]) -> Self {
        let mut counts = [0u8; 6];
        for &face in faces {
            if (1..=6).contains(&face) {
                counts[(face - 1) as usize] += 1;
            }
        }
        Self(counts)
    }

    /// How many dice show the given face (1..=6).
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        debug_assert!((1..=6).contains(&face));
        self.0[(face - 1) as usize]
    }

    /// Total number of dice counted.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Iterate over (face, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0.iter().enumerate().map(|(i, &c)| (i as u8 + 1, c))
    }

    fn is_straight(&self) -> bool {
        self.0.iter().all(|&c| c == 1)
    }

    fn is_three_pairs(&self) -> bool {
        self.0.iter().filter(|&&c| c == 2).count() == 3
    }
}

/// A scoring combination matched within one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combination {
    /// 1-2-3-4-5-6.
    Straight,
    /// Exactly three distinct pairs.
    ThreePairs,
    /// Three to six dice showing the same face.
    OfAKind { face: u8, count: u8 },
    /// One or two loose 1s or 5s.
    Singles { face: u8, count: u8 },
}

impl Combination {
    /// Points this combination is worth.
    #[must_use]
    pub fn score(&self) -> u32 {
        match *self {
            Combination::Straight => 1200,
            Combination::ThreePairs => 800,
            Combination::OfAKind { face, count } => {
                let base = if face == 1 { 1000 } else { u32::from(face) * 100 };
                // count 3 scores the base, each extra die doubles it
                base << (count - 3)
            }
            Combination::Singles { face, count } => {
                let per_die = if face == 1 { 100 } else { 50 };
                per_die * u32::from(count)
            }
        }
    }

    /// How many dice this combination consumes.
    #[must_use]
    pub fn dice_used(&self) -> u8 {
        match *self {
            Combination::Straight | Combination::ThreePairs => 6,
            Combination::OfAKind { count, .. } | Combination::Singles { count, .. } => count,
        }
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Combination::Straight => write!(f, "straight"),
            Combination::ThreePairs => write!(f, "three pairs"),
            Combination::OfAKind { face, count } => write!(f, "{} x {}", count, face),
            Combination::Singles { face, count } => write!(f, "{} single {}s", count, face),
        }
    }
}

/// Result of evaluating one roll.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollScore {
    /// Sum of all matched combination scores. Zero means bust.
    pub total: u32,
    /// Aggregate count of dice consumed by the matched combinations.
    pub dice_used: u8,
    /// The matched combinations, in evaluation order.
    pub combinations: SmallVec<[Combination; 4]>,
}

impl RollScore {
    /// A roll that scored nothing forfeits the turn's accumulated score.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total == 0
    }
}

/// Evaluate a roll's frequency distribution against the scoring table.
///
/// All matching combinations contribute; single 1s and 5s are suppressed
/// when a straight or three pairs already accounts for every die.
#[must_use]
pub fn evaluate(freq: &RollFrequency) -> RollScore {
    let mut combinations: SmallVec<[Combination; 4]> = SmallVec::new();

    if freq.is_straight() {
        combinations.push(Combination::Straight);
    }
    if freq.is_three_pairs() {
        combinations.push(Combination::ThreePairs);
    }

    for (face, count) in freq.iter() {
        if (3..=6).contains(&count) {
            combinations.push(Combination::OfAKind { face, count });
        }
    }

    // Loose 1s and 5s only score when no straight or three pairs claimed
    // the whole roll.
    let blocked = freq.is_straight() || freq.is_three_pairs();
    if !blocked {
        for face in [1u8, 5] {
            let count = freq.count(face);
            if (1..=2).contains(&count) {
                combinations.push(Combination::Singles { face, count });
            }
        }
    }

    let total = combinations.iter().map(Combination::score).sum();
    let dice_used = combinations.iter().map(Combination::dice_used).sum();

    RollScore {
        total,
        dice_used,
        combinations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(faces: &[u8]) -> RollScore {
        evaluate(&RollFrequency::from_faces(faces))
    }

    #[test]
    fn test_frequency_from_faces() {
        let freq = RollFrequency::from_faces(&[2, 2, 2, 5, 5, 5]);

        assert_eq!(freq.count(2), 3);
        assert_eq!(freq.count(5), 3);
        assert_eq!(freq.count(1), 0);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn test_frequency_ignores_out_of_range() {
        let freq = RollFrequency::from_faces(&[0, 7, 3, 3]);

        assert_eq!(freq.total(), 2);
        assert_eq!(freq.count(3), 2);
    }

    #[test]
    fn test_straight() {
        let score = eval(&[1, 2, 3, 4, 5, 6]);

        assert_eq!(score.total, 1200);
        assert_eq!(score.dice_used, 6);
        assert_eq!(score.combinations.as_slice(), &[Combination::Straight]);
    }

    #[test]
    fn test_three_pairs() {
        let score = eval(&[2, 2, 4, 4, 6, 6]);

        assert_eq!(score.total, 800);
        assert_eq!(score.dice_used, 6);
    }

    #[test]
    fn test_three_pairs_with_ones_and_fives_blocked() {
        // Pairs of 1s and 5s must not also score as singles.
        let score = eval(&[1, 1, 5, 5, 3, 3]);

        assert_eq!(score.total, 800);
        assert_eq!(score.dice_used, 6);
        assert_eq!(score.combinations.as_slice(), &[Combination::ThreePairs]);
    }

    #[test]
    fn test_six_of_a_kind_ones() {
        let score = eval(&[1, 1, 1, 1, 1, 1]);

        assert_eq!(score.total, 8000);
        assert_eq!(score.dice_used, 6);
    }

    #[test]
    fn test_six_of_a_kind_other() {
        let score = eval(&[4, 4, 4, 4, 4, 4]);

        assert_eq!(score.total, 4 * 100 * 8);
        assert_eq!(score.dice_used, 6);
    }

    #[test]
    fn test_five_of_a_kind() {
        assert_eq!(eval(&[1, 1, 1, 1, 1]).total, 4000);
        assert_eq!(eval(&[6, 6, 6, 6, 6]).total, 6 * 100 * 4);
        assert_eq!(eval(&[3, 3, 3, 3, 3]).dice_used, 5);
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(eval(&[1, 1, 1, 1]).total, 2000);
        assert_eq!(eval(&[2, 2, 2, 2]).total, 2 * 100 * 2);
        assert_eq!(eval(&[2, 2, 2, 2]).dice_used, 4);
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(eval(&[1, 1, 1]).total, 1000);
        assert_eq!(eval(&[2, 2, 2]).total, 200);
        assert_eq!(eval(&[5, 5, 5]).total, 500);
        assert_eq!(eval(&[6, 6, 6]).total, 600);
    }

    #[test]
    fn test_two_triples_sum() {
        let score = eval(&[2, 2, 2, 5, 5, 5]);

        assert_eq!(score.total, 200 + 500);
        assert_eq!(score.dice_used, 6);
        assert_eq!(score.combinations.len(), 2);
    }

    #[test]
    fn test_single_ones() {
        assert_eq!(eval(&[1, 2, 3, 4, 4, 6]).total, 100);
        assert_eq!(eval(&[1, 1, 2, 3, 4, 6]).total, 200);
    }

    #[test]
    fn test_single_fives() {
        assert_eq!(eval(&[5, 2, 3, 4, 4, 6]).total, 50);
        assert_eq!(eval(&[5, 5, 2, 3, 4, 6]).total, 100);
    }

    #[test]
    fn test_singles_consume_only_themselves() {
        let score = eval(&[1, 1, 2, 3, 4, 6]);

        assert_eq!(score.total, 200);
        assert_eq!(score.dice_used, 2);
    }

    #[test]
    fn test_kind_and_singles_combined() {
        // Four 1s score as a kind, two 5s as singles: 2000 + 100.
        let score = eval(&[1, 1, 1, 1, 5, 5]);

        assert_eq!(score.total, 2100);
        assert_eq!(score.dice_used, 6);
    }

    #[test]
    fn test_triple_ones_not_also_singles() {
        let score = eval(&[1, 1, 1, 2, 3, 4]);

        assert_eq!(score.total, 1000);
        assert_eq!(score.dice_used, 3);
    }

    #[test]
    fn test_bust() {
        let score = eval(&[2, 3, 4, 6]);

        assert!(score.is_bust());
        assert_eq!(score.total, 0);
        assert_eq!(score.dice_used, 0);
        assert!(score.combinations.is_empty());
    }

    #[test]
    fn test_two_pairs_do_not_score() {
        assert!(eval(&[2, 2, 3, 3, 4, 6]).is_bust());
    }

    #[test]
    fn test_two_pairs_with_ones_score_singles() {
        // Two pairs is not three pairs, so the pair of 1s counts as singles.
        let score = eval(&[1, 1, 2, 2, 3, 4]);

        assert_eq!(score.total, 200);
        assert_eq!(score.dice_used, 2);
    }

    #[test]
    fn test_empty_frequency() {
        assert!(eval(&[]).is_bust());
    }

    #[test]
    fn test_combination_display() {
        assert_eq!(format!("{}", Combination::Straight), "straight");
        assert_eq!(format!("{}", Combination::ThreePairs), "three pairs");
        assert_eq!(
            format!("{}", Combination::OfAKind { face: 4, count: 3 }),
            "3 x 4"
        );
        assert_eq!(
            format!("{}", Combination::Singles { face: 5, count: 2 }),
            "2 single 5s"
        );
    }

    #[test]
    fn test_combination_serde() {
        let score = eval(&[1, 2, 3, 4, 5, 6]);

        let json = serde_json::to_string(&score).unwrap();
        let deserialized: RollScore = serde_json::from_str(&json).unwrap();

        assert_eq!(score, deserialized);
    }
}
