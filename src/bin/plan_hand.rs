//! Compute the best hold for a hand.
//!
//! Usage:
//!   PLANNER_HAND=1,1,1,5,6 plan-hand
//!   PLANNER_HAND=1,1,1,5,6 plan-hand --json
//!   PLANNER_HAND=1,1,1,5,6 PLANNER_BUDGET_MS=500 plan-hand
//!
//! When PLANNER_HAND is unset, a demo hand is rolled at random. The hold
//! decision itself never consumes randomness — it is an exact expectation.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use yahtzee_planner::constants::DEFAULT_HAND_SIZE;
use yahtzee_planner::env_config;
use yahtzee_planner::strategy::{compute_strategy, compute_strategy_with_budget, HoldChoice};

#[derive(Serialize)]
struct PlanJson<'a> {
    hand: &'a [i32],
    num_die_sides: i32,
    best: &'a HoldChoice,
}

fn main() {
    let json = std::env::args().any(|a| a == "--json");
    let num_die_sides = env_config::die_sides();
    let hand = env_config::hand().unwrap_or_else(|| {
        let mut rng = rand::thread_rng();
        (0..DEFAULT_HAND_SIZE)
            .map(|_| rng.gen_range(1..=num_die_sides))
            .collect()
    });

    let best = match env_config::budget_ms() {
        Some(ms) => {
            match compute_strategy_with_budget(&hand, num_die_sides, Duration::from_millis(ms)) {
                Ok(choice) => choice,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => compute_strategy(&hand, num_die_sides),
    };

    if json {
        let doc = PlanJson {
            hand: &hand,
            num_die_sides,
            best: &best,
        };
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
    } else {
        println!("Hand: {:?} ({}-sided dice)", hand, num_die_sides);
        println!("Best hold: {:?}", best.hold);
        println!("Expected upper-section score: {:.4}", best.expected_value);
    }
}
