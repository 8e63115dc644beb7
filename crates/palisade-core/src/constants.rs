//! Simulation constants and default tuning parameters.
//!
//! These are the compiled-in defaults; every gameplay value is also a
//! field on [`crate::tuning::Tuning`] so a shell can override it without
//! a code change.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

/// Margin beyond the playfield before a projectile is culled.
pub const PLAYFIELD_OOB_MARGIN: f64 = 50.0;

// --- Defenders ---

/// Coin cost of placing one defender.
pub const DEFENDER_COST: u32 = 100;

/// Defender engagement range (pixels).
pub const DEFENDER_RANGE: f64 = 150.0;

/// Minimum interval between successful shots (seconds).
pub const DEFENDER_FIRE_INTERVAL_SECS: f64 = 1.0;

// --- Projectiles ---

/// Projectile speed (px/s).
pub const PROJECTILE_SPEED: f64 = 240.0;

/// Damage applied per projectile hit.
pub const PROJECTILE_DAMAGE: f64 = 10.0;

// --- Adversaries ---

/// Adversary health at spawn.
pub const ADVERSARY_MAX_HEALTH: f64 = 30.0;

/// Adversary base traversal speed (px/s). Ramps up between waves.
pub const ADVERSARY_BASE_SPEED: f64 = 60.0;

/// Radius within which a projectile registers a hit (pixels).
pub const ADVERSARY_HIT_RADIUS: f64 = 20.0;

// --- Waves ---

/// Spawn target per wave unit: wave N spawns N times this many.
pub const ADVERSARIES_PER_WAVE: u32 = 5;

/// Interval between adversary spawns within a wave (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 1.0;

/// Speed added to the adversary speed after each cleared wave (px/s).
pub const SPEED_RAMP_INCREMENT: f64 = 6.0;

// --- Economy ---

/// Coins granted at session start.
pub const STARTING_COINS: u32 = 300;

/// Coins awarded for clearing a wave.
pub const WAVE_COIN_REWARD: u32 = 50;

// --- Player ---

/// Player health at the start of each wave.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Health lost per leaked adversary.
pub const LEAK_HEALTH_PENALTY: i32 = 10;

/// Duration of the placement phase (seconds).
pub const PLACEMENT_DURATION_SECS: f64 = 30.0;

// --- Path ---

/// Default traversal path: a 6-point polyline from the left edge to the
/// right edge of the playfield.
pub const DEFAULT_PATH: [(f64, f64); 6] = [
    (0.0, 300.0),
    (266.0, 300.0),
    (266.0, 200.0),
    (533.0, 200.0),
    (533.0, 400.0),
    (800.0, 400.0),
];
