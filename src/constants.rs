//! Planner constants.

/// Highest face that credits the restricted upper section (Ones through Fours).
pub const UPPER_FACE_MAX: i32 = 4;

/// Standard die side count.
pub const DEFAULT_DIE_SIDES: i32 = 6;

/// Standard Yahtzee hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;
