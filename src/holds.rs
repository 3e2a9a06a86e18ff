//! Hold enumeration: every sub-selection of the hand that could be kept.

use std::collections::BTreeSet;

/// Generate all possible choices of dice from `hand` to hold.
///
/// Conceptually the power set of die positions, projected to value-tuples in
/// hand order and set-deduplicated. Holds are tracked by value, not by
/// position: two positions showing the same face collapse into one hold
/// whenever the kept values coincide, so a hand with repeated faces yields
/// fewer than `2^n` distinct holds. This value-collapsed representation is
/// deliberate and part of the public contract — callers that need physical
/// per-die fidelity must index positions themselves.
///
/// Set-doubling fold over the hand, equivalent to the recursion
/// `holds(P + [e]) = holds(P) ∪ { h + [e] | h ∈ holds(P) }`.
pub fn enumerate_holds(hand: &[i32]) -> BTreeSet<Vec<i32>> {
    let mut holds: BTreeSet<Vec<i32>> = BTreeSet::new();
    holds.insert(Vec::new());
    for &die in hand {
        let mut extended = BTreeSet::new();
        for hold in &holds {
            let mut with_die = hold.clone();
            with_die.push(die);
            extended.insert(with_die);
        }
        holds.extend(extended);
    }
    holds
}
