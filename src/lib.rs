//! # Upper-section Yahtzee hold planner
//!
//! Computes, for a single Yahtzee hand, the hold (dice to keep) that
//! maximizes the expected upper-section score after rerolling the rest.
//! The expectation is exact: every reroll outcome is enumerated, not sampled.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Hold enumeration | [`holds`] | Power set of die positions, projected to value-tuples |
//! | Reroll enumeration | [`sequences`] | All `sides^k` outcomes for `k` free dice |
//! | Scoring | [`scoring`] | Restricted upper section: faces 1–4 credit face × count |
//! | Expectation | [`expectation`] | Exact mean score over every reroll outcome |
//! | Selection | [`strategy`] | Arg-max of (expected value, hold) over all holds |
//!
//! ## Scoring model
//!
//! Only the upper section, restricted to Ones through Fours: a complete hand
//! scores Σ face × count for faces 1..=4. Fives and sixes never score, and no
//! lower-section categories, bonuses, or scorecard state exist here. This is
//! a per-hand decision aid, not a game engine.
//!
//! ## Cost model
//!
//! Everything is brute force: up to `2^n` holds (fewer when faces repeat,
//! since holds are value-collapsed) times `sides^k` reroll outcomes per hold.
//! A 5-die, 6-sided hand costs tens of thousands of hand scorings — fine for
//! interactive use, exponential beyond it.
//! [`strategy::compute_strategy_with_budget`] bounds the sweep with a
//! wall-clock budget when the caller needs a hard stop.

pub mod constants;
pub mod env_config;
pub mod expectation;
pub mod holds;
pub mod scoring;
pub mod sequences;
pub mod strategy;
