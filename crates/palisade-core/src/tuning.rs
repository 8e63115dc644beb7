//! Tunable gameplay configuration.
//!
//! Every gameplay constant is a field here so a shell can override it
//! (e.g. from a JSON file) without a code change. Defaults come from
//! [`crate::constants`]. The tick rate itself is not tunable: it is the
//! fixed logical timestep the simulation is defined against.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// All gameplay knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // --- Defenders ---
    pub defender_cost: u32,
    pub defender_range: f64,
    pub defender_fire_interval_secs: f64,

    // --- Projectiles ---
    pub projectile_speed: f64,
    pub projectile_damage: f64,

    // --- Adversaries ---
    pub adversary_max_health: f64,
    pub adversary_base_speed: f64,
    pub adversary_hit_radius: f64,

    // --- Waves ---
    pub adversaries_per_wave: u32,
    pub spawn_interval_secs: f64,
    pub speed_ramp_increment: f64,

    // --- Economy ---
    pub starting_coins: u32,
    pub wave_coin_reward: u32,

    // --- Player ---
    pub player_max_health: i32,
    pub leak_health_penalty: i32,
    pub placement_duration_secs: f64,

    // --- Playfield ---
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub playfield_oob_margin: f64,

    /// Traversal path waypoints (at least two).
    pub path: Vec<Position>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            defender_cost: DEFENDER_COST,
            defender_range: DEFENDER_RANGE,
            defender_fire_interval_secs: DEFENDER_FIRE_INTERVAL_SECS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            adversary_max_health: ADVERSARY_MAX_HEALTH,
            adversary_base_speed: ADVERSARY_BASE_SPEED,
            adversary_hit_radius: ADVERSARY_HIT_RADIUS,
            adversaries_per_wave: ADVERSARIES_PER_WAVE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            speed_ramp_increment: SPEED_RAMP_INCREMENT,
            starting_coins: STARTING_COINS,
            wave_coin_reward: WAVE_COIN_REWARD,
            player_max_health: PLAYER_MAX_HEALTH,
            leak_health_penalty: LEAK_HEALTH_PENALTY,
            placement_duration_secs: PLACEMENT_DURATION_SECS,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            playfield_oob_margin: PLAYFIELD_OOB_MARGIN,
            path: DEFAULT_PATH
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
        }
    }
}

impl Tuning {
    pub fn fire_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.defender_fire_interval_secs)
    }

    pub fn spawn_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.spawn_interval_secs)
    }

    pub fn placement_ticks(&self) -> u64 {
        secs_to_ticks(self.placement_duration_secs)
    }
}

/// Convert a duration in seconds to whole ticks, never less than one.
pub fn secs_to_ticks(secs: f64) -> u64 {
    ((secs * TICK_RATE as f64).round() as u64).max(1)
}
