//! Simulation constants and tuning parameters.

// --- Scheduling ---

/// Countdown period (ms).
pub const COUNTDOWN_PERIOD_MS: u64 = 1_000;

/// Hazard (fire spread + smoke) period (ms).
pub const HAZARD_PERIOD_MS: u64 = 5_000;

/// Execution (player movement) period (ms). ~16.7 Hz.
pub const EXECUTION_PERIOD_MS: u64 = 60;

// --- Map ---

/// Logical map edge length (map units).
pub const MAP_SIZE: f64 = 320.0;

/// Fires may only spawn inside `[SPAWN_MIN, SPAWN_MAX]` on both axes.
pub const SPAWN_MIN: f64 = 20.0;
pub const SPAWN_MAX: f64 = 300.0;

// --- Fire ---

pub const FIRE_RADIUS_SMALL: f64 = 15.0;
pub const FIRE_RADIUS_MEDIUM: f64 = 25.0;
pub const FIRE_RADIUS_LARGE: f64 = 35.0;

pub const SPREAD_BASE_SMALL: f64 = 0.3;
pub const SPREAD_BASE_MEDIUM: f64 = 0.5;
pub const SPREAD_BASE_LARGE: f64 = 0.7;

/// Upper bound on spread probability regardless of elapsed time.
pub const SPREAD_PROBABILITY_CAP: f64 = 0.9;

/// Elapsed seconds are divided by this to get the time bonus / upgrade chance.
pub const SPREAD_TIME_DIVISOR: f64 = 100.0;

/// Orthogonal spawn offset (map units).
pub const SPREAD_ORTHOGONAL_OFFSET: f64 = 20.0;

/// Diagonal spawn offset per axis (map units).
pub const SPREAD_DIAGONAL_OFFSET: f64 = 14.0;

/// A spawn candidate closer than this to any fire is rejected.
pub const SPREAD_MIN_SEPARATION: f64 = 10.0;

// --- Smoke ---

/// Smoke radius = fire spread radius × this.
pub const SMOKE_RADIUS_FACTOR: f64 = 2.5;

/// Default radius growth per hazard tick.
pub const SMOKE_EXPANSION_PER_TICK: f64 = 4.0;

/// Zones at or above this age are removed.
pub const SMOKE_MAX_AGE: u32 = 6;

// --- Extinguisher ---

/// Charges granted on pickup.
pub const EXTINGUISHER_CHARGES: u32 = 3;

/// Route/player distance at which an extinguisher is picked up.
pub const PICKUP_RADIUS: f64 = 20.0;

/// Fires within this distance of the spray point are affected.
pub const SUPPRESSION_RADIUS: f64 = 40.0;

// --- Exits ---

/// An unsuppressed fire this close blocks the exit.
pub const EXIT_BLOCK_RADIUS: f64 = 40.0;

/// A smoke center this close makes the exit risky.
pub const EXIT_RISK_RADIUS: f64 = 60.0;

/// Player distance at which an open exit is reached.
pub const EXIT_REACH_RADIUS: f64 = 25.0;

// --- Route planning ---

pub const ROUTE_SAFETY_MAX: u32 = 100;
pub const ROUTE_FIRE_PENALTY: u32 = 30;
pub const ROUTE_SMOKE_PENALTY: u32 = 10;

/// Person rescued at planning time when a route point is strictly closer than this.
pub const PLANNING_RESCUE_RADIUS: f64 = 20.0;

pub const FEEDBACK_SUCCESS_THRESHOLD: u32 = 80;
pub const FEEDBACK_WARNING_THRESHOLD: u32 = 50;

/// Corridor validator sample spacing (map units).
pub const CORRIDOR_SAMPLE_STEP: f64 = 5.0;

// --- Execution ---

/// Person rescued during execution within this distance of the player.
pub const EXECUTION_RESCUE_RADIUS: f64 = 25.0;

/// Penalty for rescuing while standing in fire without an extinguisher.
pub const RESCUE_IN_FIRE_PENALTY: u32 = 50;

/// Score lost per execution tick in heavy smoke.
pub const SMOKE_TICK_PENALTY: u32 = 1;

/// Exposure counter above this fails the run.
pub const SMOKE_EXPOSURE_LIMIT: u32 = 33;

/// Route indices between consecutive followers.
pub const FOLLOWER_SPACING: usize = 8;

// --- Scoring ---

pub const COMPLETION_BASE_SCORE: u32 = 1000;
pub const TIME_BONUS_PER_SEC: u32 = 10;
pub const RESCUE_BONUS: u32 = 100;
pub const SAFE_ROUTE_BONUS: u32 = 200;

/// Route safety at or above this earns the safe-route bonus.
pub const SAFE_ROUTE_THRESHOLD: u32 = 90;

pub const GRADE_S_THRESHOLD: u32 = 1800;
pub const GRADE_A_THRESHOLD: u32 = 1500;
pub const GRADE_B_THRESHOLD: u32 = 1200;
pub const GRADE_C_THRESHOLD: u32 = 900;
pub const GRADE_D_THRESHOLD: u32 = 600;
