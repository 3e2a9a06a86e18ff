//! Print the full hold → expected-value table for a hand, best first.
//!
//! Usage:
//!   PLANNER_HAND=2,1,1 hold-table
//!   PLANNER_HAND=2,1,1 PLANNER_DIE_SIDES=8 hold-table

use std::cmp::Ordering;

use yahtzee_planner::env_config;
use yahtzee_planner::scoring::mean_face_value;
use yahtzee_planner::strategy::hold_expected_values;

fn main() {
    let num_die_sides = env_config::die_sides();
    let hand = env_config::hand().unwrap_or_else(|| vec![2, 1, 1]);

    let table = hold_expected_values(&hand, num_die_sides);
    println!("Hand: {:?} ({}-sided dice)", hand, num_die_sides);
    println!("Mean face value: {:.4}", mean_face_value(&hand));
    println!("{:<24} expected value", "hold");

    // Same order the selector uses: (expected_value, hold) descending.
    let mut rows: Vec<(Vec<i32>, f64)> = table.into_iter().collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.0.cmp(&a.0))
    });
    for (hold, ev) in rows {
        println!("{:<24} {:.4}", format!("{:?}", hold), ev);
    }
}
