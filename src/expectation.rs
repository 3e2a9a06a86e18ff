//! Exact expected value of a partial hold, by exhaustive reroll enumeration.

use crate::scoring::compute_upper_score;
use crate::sequences::{enumerate_sequences, face_values};

/// Compute the expected upper-section score of `held_dice` once
/// `num_free_dice` dice with `num_die_sides` sides are rerolled.
///
/// Every reroll outcome is generated exactly once and the scores are averaged
/// under the uniform model — an exact expectation, not a simulation. With zero
/// free dice the single empty outcome makes this the exact score of
/// `held_dice`, which is how a keep-everything hold is valued.
///
/// Caller invariant (not checked): `held_dice.len() + num_free_dice` equals
/// the size of the hand being evaluated.
pub fn compute_expected_value(
    held_dice: &[i32],
    num_die_sides: i32,
    num_free_dice: usize,
) -> f64 {
    let outcomes = face_values(num_die_sides);
    let rolls = enumerate_sequences(&outcomes, num_free_dice);
    let num_rolls = rolls.len();

    let mut total_score = 0i64;
    let mut hand = Vec::with_capacity(held_dice.len() + num_free_dice);
    for roll in &rolls {
        hand.clear();
        hand.extend_from_slice(held_dice);
        hand.extend_from_slice(roll);
        total_score += compute_upper_score(&hand) as i64;
    }
    total_score as f64 / num_rolls as f64
}
