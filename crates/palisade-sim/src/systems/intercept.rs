//! Intercept system — resolves projectile–adversary collisions.
//!
//! A projectile hits when its distance to an adversary is within the
//! hit radius. It is consumed by its first hit regardless of whether
//! the hit was lethal; the adversary is destroyed as a kill the same
//! tick its health drops to zero or below. Projectiles resolve
//! sequentially in a stable order, so two projectiles may hit the same
//! adversary in one tick but a dead adversary absorbs no further hits.

use hecs::{Entity, World};

use palisade_core::components::{Adversary, Projectile};
use palisade_core::events::GameEvent;
use palisade_core::tuning::Tuning;
use palisade_core::types::Position;

use crate::wave::Tally;

pub fn run(
    world: &mut World,
    tuning: &Tuning,
    tally: &mut Tally,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Stable processing order for projectiles.
    let mut projectiles: Vec<(Entity, Position, f64)> = {
        let mut query = world.query::<(&Projectile, &Position)>();
        query
            .iter()
            .map(|(entity, (projectile, pos))| (entity, *pos, projectile.damage))
            .collect()
    };
    projectiles.sort_by_key(|&(entity, _, _)| entity.to_bits());

    let mut targets: Vec<(Entity, u32, Position)> = {
        let mut query = world.query::<(&Adversary, &Position)>();
        query
            .iter()
            .map(|(entity, (adversary, pos))| (entity, adversary.id, *pos))
            .collect()
    };
    targets.sort_by_key(|&(_, id, _)| id);

    let hit_radius_sq = tuning.adversary_hit_radius * tuning.adversary_hit_radius;
    let mut dead: Vec<Entity> = Vec::new();

    for (projectile_entity, projectile_pos, damage) in projectiles {
        // Nearest adversary within the hit radius; the strict `<` keeps
        // the lowest id among equidistant candidates.
        let mut best: Option<(f64, Entity, u32)> = None;
        for &(target_entity, id, target_pos) in &targets {
            if dead.contains(&target_entity) {
                continue;
            }
            let dist_sq = projectile_pos.range_sq_to(&target_pos);
            if dist_sq <= hit_radius_sq && best.is_none_or(|(best_sq, _, _)| dist_sq < best_sq) {
                best = Some((dist_sq, target_entity, id));
            }
        }

        let Some((_, target_entity, target_id)) = best else {
            continue;
        };

        despawn_buffer.push(projectile_entity);

        if let Ok(mut adversary) = world.get::<&mut Adversary>(target_entity) {
            adversary.health -= damage;
            if adversary.health <= 0.0 {
                dead.push(target_entity);
                tally.killed += 1;
                events.push(GameEvent::AdversaryKilled { id: target_id });
            }
        }
    }

    despawn_buffer.extend(dead);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
