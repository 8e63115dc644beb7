//! Cleanup system: removes projectiles that have left the playfield.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use palisade_core::components::Projectile;
use palisade_core::tuning::Tuning;
use palisade_core::types::Position;

pub fn run(world: &mut World, tuning: &Tuning, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let margin = tuning.playfield_oob_margin;
    let min_x = -margin;
    let min_y = -margin;
    let max_x = tuning.playfield_width + margin;
    let max_y = tuning.playfield_height + margin;

    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.x < min_x || pos.x > max_x || pos.y < min_y || pos.y > max_y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every projectile still in flight. Called when a wave
/// completes so Placement snapshots carry no stale projectiles.
pub fn clear_projectiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _projectile) in world.query_mut::<&Projectile>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
