//! Restricted upper-section scoring: only faces 1–4 credit points.

use crate::constants::UPPER_FACE_MAX;

/// Compute the maximal upper-section score for a complete hand:
/// Σ face × count for faces 1..=4.
///
/// Fives, sixes, and any out-of-range value simply never match and contribute
/// nothing — this is a total function over any integer slice, with no
/// validation. An empty hand scores 0.
pub fn compute_upper_score(hand: &[i32]) -> i32 {
    let mut total = 0;
    for face in 1..=UPPER_FACE_MAX {
        let count = hand.iter().filter(|&&d| d == face).count() as i32;
        total += face * count;
    }
    total
}

/// Occurrence-weighted mean face value of a hand: Σ face × count / len.
///
/// Diagnostic helper; an empty hand yields 0.0.
pub fn mean_face_value(hand: &[i32]) -> f64 {
    if hand.is_empty() {
        return 0.0;
    }
    let sum: i32 = hand.iter().sum();
    sum as f64 / hand.len() as f64
}
