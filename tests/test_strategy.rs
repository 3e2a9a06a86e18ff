//! End-to-end planner scenarios with hand-checked expected values.

use std::time::Duration;

use yahtzee_planner::expectation::compute_expected_value;
use yahtzee_planner::holds::enumerate_holds;
use yahtzee_planner::scoring::compute_upper_score;
use yahtzee_planner::strategy::{
    compute_strategy, compute_strategy_with_budget, hold_expected_values,
};

// One fresh 6-sided die is worth (1+2+3+4)/6 = 5/3 expected upper points.
const EV_PER_FREE_DIE: f64 = 5.0 / 3.0;

#[test]
fn score_worked_examples() {
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 1]), 12);
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 2]), 13);
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 3]), 14);
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 4]), 15);
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 5]), 11);
    assert_eq!(compute_upper_score(&[2, 3, 3, 3, 6]), 11);
}

#[test]
fn one_reroll_exhaustiveness_identity() {
    let total: i32 = (1..=6).map(|v| compute_upper_score(&[2, 3, 3, 3, v])).sum();
    assert_eq!(total, 76);
    let ev = compute_expected_value(&[2, 3, 3, 3], 6, 1);
    assert!((ev * 6.0 - total as f64).abs() < 1e-9);
}

#[test]
fn rerolling_everything_beats_holding_low_ones() {
    // (1,1,1,5,6): fives and sixes never score, and a kept 1 is worth less
    // than the 5/3 a rerolled die returns, so the empty hold wins outright.
    let hand = [1, 1, 1, 5, 6];
    let best = compute_strategy(&hand, 6);
    assert_eq!(best.hold, Vec::<i32>::new());
    assert!((best.expected_value - 5.0 * EV_PER_FREE_DIE).abs() < 1e-9);

    let table = hold_expected_values(&hand, 6);
    let ev_ones = table[&vec![1, 1, 1]];
    assert!((ev_ones - (3.0 + 2.0 * EV_PER_FREE_DIE)).abs() < 1e-9);
    assert!(best.expected_value > ev_ones);
    assert!(best.expected_value > table[&vec![1, 1, 1, 5]]);
}

#[test]
fn holding_high_scorers_beats_rerolling_them() {
    // (4,4,4,1,1): a kept 4 is worth 4 > 5/3, a kept 1 is worth 1 < 5/3,
    // so the unique optimum keeps exactly the fours.
    let best = compute_strategy(&[4, 4, 4, 1, 1], 6);
    assert_eq!(best.hold, vec![4, 4, 4]);
    assert!((best.expected_value - (12.0 + 2.0 * EV_PER_FREE_DIE)).abs() < 1e-9);
}

#[test]
fn three_dice_hold_table_is_complete() {
    let hand = [2, 1, 1];
    let table = hold_expected_values(&hand, 6);
    let holds = enumerate_holds(&hand);
    assert_eq!(table.len(), holds.len());
    // Value-collapsed: 6 distinct holds, not 2^3 = 8.
    assert_eq!(holds.len(), 6);
    for hold in &holds {
        let ev = table[hold];
        assert!(ev.is_finite() && ev >= 0.0, "hold {hold:?} has ev={ev}");
    }

    let best = compute_strategy(&hand, 6);
    assert_eq!(best.hold, vec![2]);
    assert!((best.expected_value - (2.0 + 2.0 * EV_PER_FREE_DIE)).abs() < 1e-9);
}

#[test]
fn equal_value_ties_fall_to_the_greater_hold() {
    // Three-sided dice have mean upper value 2, so holding a 2 is exactly
    // EV-neutral: the empty hold and [2] tie at 4.0 and the (value, hold)
    // order resolves toward the greater tuple.
    let best = compute_strategy(&[2, 1], 3);
    assert!((best.expected_value - 4.0).abs() < 1e-9);
    assert_eq!(best.hold, vec![2]);
}

#[test]
fn empty_hand_degenerates_to_the_trivial_hold() {
    let best = compute_strategy(&[], 6);
    assert_eq!(best.hold, Vec::<i32>::new());
    assert_eq!(best.expected_value, 0.0);
    assert_eq!(enumerate_holds(&[]).len(), 1);
}

#[test]
fn budget_variant_agrees_when_roomy() {
    let hand = [1, 1, 1, 5, 6];
    let unbudgeted = compute_strategy(&hand, 6);
    let roomy = compute_strategy_with_budget(&hand, 6, Duration::from_secs(60)).unwrap();
    assert_eq!(roomy, unbudgeted);
}

#[test]
fn zero_budget_fails_fast() {
    let err = compute_strategy_with_budget(&[1, 1, 1, 5, 6], 6, Duration::ZERO).unwrap_err();
    assert_eq!(err.budget, Duration::ZERO);
    assert!(err.holds_evaluated < err.holds_total);
}
