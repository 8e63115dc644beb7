//! Entity spawn factories.
//!
//! Creates defenders, adversaries, and projectiles with appropriate
//! component bundles.

use glam::DVec2;
use hecs::World;

use palisade_core::components::{Adversary, Defender, Projectile};
use palisade_core::path::Path;
use palisade_core::tuning::Tuning;
use palisade_core::types::{Position, Velocity};

/// Spawn a defender at (x, y). The position is fixed for the rest of
/// the session.
pub fn spawn_defender(world: &mut World, tuning: &Tuning, id: u32, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        Defender {
            id,
            range: tuning.defender_range,
            fire_interval_ticks: tuning.fire_interval_ticks(),
            last_fire_tick: None,
        },
        Position::new(x, y),
    ))
}

/// Spawn an adversary at the path's first waypoint with full health.
pub fn spawn_adversary(world: &mut World, tuning: &Tuning, path: &Path, id: u32) -> hecs::Entity {
    world.spawn((
        Adversary {
            id,
            segment: 0,
            health: tuning.adversary_max_health,
        },
        path.first(),
    ))
}

/// Spawn a projectile at `origin` aimed along `direction` (a unit
/// vector; a zero vector produces a stationary projectile, which the
/// degenerate zero-range shot requires).
pub fn spawn_projectile(
    world: &mut World,
    tuning: &Tuning,
    origin: Position,
    direction: DVec2,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            damage: tuning.projectile_damage,
        },
        origin,
        Velocity::from_dvec2(direction * tuning.projectile_speed),
    ))
}
