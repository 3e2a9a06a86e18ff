//! Hold selection: arg-max of expected value over every possible hold.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::expectation::compute_expected_value;
use crate::holds::enumerate_holds;

/// The selected hold and its exact expected value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoldChoice {
    pub expected_value: f64,
    pub hold: Vec<i32>,
}

impl HoldChoice {
    /// Total order used for selection: descending on (expected_value, hold).
    ///
    /// Ties in expected value fall to the lexicographically greater hold
    /// tuple. That is an artifact of the pair ordering, not a preference for
    /// holding more or fewer dice; it exists only to make the maximum unique.
    fn beats(&self, other: &HoldChoice) -> bool {
        match self.expected_value.partial_cmp(&other.expected_value) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less) => false,
            _ => self.hold > other.hold,
        }
    }
}

/// The wall-clock budget ran out before the hold sweep finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetExceeded {
    pub budget: Duration,
    pub holds_evaluated: usize,
    pub holds_total: usize,
}

impl fmt::Display for BudgetExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hold sweep exceeded its {:?} budget after {} of {} holds",
            self.budget, self.holds_evaluated, self.holds_total
        )
    }
}

impl Error for BudgetExceeded {}

/// Compute the hold that maximizes the expected value when the discarded
/// dice are rerolled.
///
/// Every hold from [`enumerate_holds`] is valued via
/// [`compute_expected_value`] with `num_free_dice = hand.len() - hold.len()`,
/// and the maximum under the descending (expected_value, hold) order is
/// returned. An empty hand degenerates to the empty hold with value 0.0.
pub fn compute_strategy(hand: &[i32], num_die_sides: i32) -> HoldChoice {
    let mut best = HoldChoice {
        expected_value: f64::NEG_INFINITY,
        hold: Vec::new(),
    };
    for hold in enumerate_holds(hand) {
        let ev = compute_expected_value(&hold, num_die_sides, hand.len() - hold.len());
        let candidate = HoldChoice {
            expected_value: ev,
            hold,
        };
        if candidate.beats(&best) {
            best = candidate;
        }
    }
    best
}

/// Compute the full hold → expected-value mapping for a hand.
///
/// Same sweep as [`compute_strategy`], but returns every pairing instead of
/// only the maximum. Useful for inspecting how close the alternatives are.
pub fn hold_expected_values(hand: &[i32], num_die_sides: i32) -> BTreeMap<Vec<i32>, f64> {
    enumerate_holds(hand)
        .into_iter()
        .map(|hold| {
            let ev = compute_expected_value(&hold, num_die_sides, hand.len() - hold.len());
            (hold, ev)
        })
        .collect()
}

/// Like [`compute_strategy`], but fails with [`BudgetExceeded`] if the sweep
/// runs past `budget` wall-clock time.
///
/// The deadline is checked between holds, so the sweep overshoots by at most
/// one expected-value evaluation. The sweep cost is exponential in hand size
/// and side count; this is the bound for callers that cannot tolerate that.
pub fn compute_strategy_with_budget(
    hand: &[i32],
    num_die_sides: i32,
    budget: Duration,
) -> Result<HoldChoice, BudgetExceeded> {
    let start = Instant::now();
    let holds = enumerate_holds(hand);
    let holds_total = holds.len();

    let mut best = HoldChoice {
        expected_value: f64::NEG_INFINITY,
        hold: Vec::new(),
    };
    for (holds_evaluated, hold) in holds.into_iter().enumerate() {
        if start.elapsed() >= budget {
            return Err(BudgetExceeded {
                budget,
                holds_evaluated,
                holds_total,
            });
        }
        let ev = compute_expected_value(&hold, num_die_sides, hand.len() - hold.len());
        let candidate = HoldChoice {
            expected_value: ev,
            hold,
        };
        if candidate.beats(&best) {
            best = candidate;
        }
    }
    Ok(best)
}
