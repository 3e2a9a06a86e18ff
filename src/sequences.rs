//! Outcome-sequence enumeration: every possible reroll of the free dice.
//!
//! `enumerate_sequences(&face_values(s), k)` is the set of all `s^k` ordered
//! reroll outcomes. Built iteratively by level-by-level expansion so nothing
//! recurses on `k`; the set container deduplicates for free.

use std::collections::BTreeSet;

/// Enumerate all distinct sequences of `length` drawn with repetition from
/// `outcomes`.
///
/// For `length == 0` the result is the singleton set containing the empty
/// sequence. When `outcomes` holds no duplicates the result has exactly
/// `outcomes.len().pow(length)` elements.
pub fn enumerate_sequences(outcomes: &[i32], length: usize) -> BTreeSet<Vec<i32>> {
    let mut sequences: BTreeSet<Vec<i32>> = BTreeSet::new();
    sequences.insert(Vec::new());
    for _ in 0..length {
        let mut extended = BTreeSet::new();
        for partial in &sequences {
            for &item in outcomes {
                let mut next = partial.clone();
                next.push(item);
                extended.insert(next);
            }
        }
        sequences = extended;
    }
    sequences
}

/// The face universe `{1..=num_die_sides}` used as the outcome alphabet.
pub fn face_values(num_die_sides: i32) -> Vec<i32> {
    (1..=num_die_sides).collect()
}
