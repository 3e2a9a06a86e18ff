//! Shared environment configuration for the planner binaries.
//!
//! Consolidates `PLANNER_HAND`, `PLANNER_DIE_SIDES`, and `PLANNER_BUDGET_MS`
//! reads shared by the binaries.

use crate::constants::DEFAULT_DIE_SIDES;

/// Read `PLANNER_DIE_SIDES` (default 6). Exits on malformed input.
pub fn die_sides() -> i32 {
    match std::env::var("PLANNER_DIE_SIDES") {
        Err(_) => DEFAULT_DIE_SIDES,
        Ok(raw) => match raw.parse() {
            Ok(sides) => sides,
            Err(_) => {
                eprintln!("Malformed PLANNER_DIE_SIDES: {}", raw);
                std::process::exit(1);
            }
        },
    }
}

/// Read `PLANNER_HAND` as comma-separated faces (e.g. `"1,1,1,5,6"`).
/// Returns `None` when unset; exits on malformed input.
pub fn hand() -> Option<Vec<i32>> {
    let raw = std::env::var("PLANNER_HAND").ok()?;
    let mut dice = Vec::new();
    for part in raw.split(',') {
        match part.trim().parse() {
            Ok(d) => dice.push(d),
            Err(_) => {
                eprintln!("Malformed PLANNER_HAND: {}", raw);
                std::process::exit(1);
            }
        }
    }
    Some(dice)
}

/// Read `PLANNER_BUDGET_MS`. Returns `None` when unset; exits on malformed
/// input.
pub fn budget_ms() -> Option<u64> {
    let raw = std::env::var("PLANNER_BUDGET_MS").ok()?;
    match raw.parse() {
        Ok(ms) => Some(ms),
        Err(_) => {
            eprintln!("Malformed PLANNER_BUDGET_MS: {}", raw);
            std::process::exit(1);
        }
    }
}
