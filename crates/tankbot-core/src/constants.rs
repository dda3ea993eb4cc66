//! Agent constants and tuning parameters.

// --- Ballistics ---

/// Default bullet speed (arena units per second).
pub const BULLET_SPEED: f64 = 450.0;

// --- Interception search ---

/// Increment of the candidate intercept time (seconds).
pub const INTERCEPT_STEP_SECS: f64 = 0.01;

/// Search horizon. No solution within `[0, horizon)` means "do not fire".
pub const INTERCEPT_HORIZON_SECS: f64 = 5.0;

/// Number of candidate times examined: `horizon / step`.
pub const INTERCEPT_MAX_STEPS: u32 = 500;

// --- Protocol ---

/// Default end-of-initialization sentinel line.
pub const END_INIT_SIGNAL: &str = "END_INIT";

/// Default end-of-game sentinel line.
pub const END_GAME_SIGNAL: &str = "END";
