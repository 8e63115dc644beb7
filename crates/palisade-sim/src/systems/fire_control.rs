//! Fire control system — cooldown gating, target selection, and
//! projectile emission.
//!
//! Target selection is deterministic: the nearest in-range adversary by
//! squared distance, ties broken by lowest adversary id (insertion
//! order). A defender with no target in range does not consume its
//! cooldown.

use glam::DVec2;
use hecs::World;

use palisade_core::components::{Adversary, Defender};
use palisade_core::events::GameEvent;
use palisade_core::tuning::Tuning;
use palisade_core::types::Position;

use crate::world_setup;

pub fn run(world: &mut World, tuning: &Tuning, current_tick: u64, events: &mut Vec<GameEvent>) {
    // Gather target candidates once, in id order so the strict `<`
    // below keeps the lowest id among equidistant targets.
    let mut candidates: Vec<(u32, Position)> = {
        let mut query = world.query::<(&Adversary, &Position)>();
        query
            .iter()
            .map(|(_, (adversary, pos))| (adversary.id, *pos))
            .collect()
    };
    if candidates.is_empty() {
        return;
    }
    candidates.sort_by_key(|&(id, _)| id);

    // Decide every shot before spawning: projectile spawns must not
    // run while the defender query borrows the world.
    let mut shots: Vec<(Position, DVec2, u32, u32)> = Vec::new();

    for (_entity, (defender, pos)) in world.query_mut::<(&mut Defender, &Position)>() {
        if let Some(last) = defender.last_fire_tick {
            if current_tick.saturating_sub(last) < defender.fire_interval_ticks {
                continue;
            }
        }

        let range_sq = defender.range * defender.range;
        let mut best: Option<(f64, u32, Position)> = None;
        for &(id, target) in &candidates {
            let dist_sq = pos.range_sq_to(&target);
            if dist_sq <= range_sq && best.is_none_or(|(best_sq, _, _)| dist_sq < best_sq) {
                best = Some((dist_sq, id, target));
            }
        }

        if let Some((_, target_id, target)) = best {
            let direction = (target.to_dvec2() - pos.to_dvec2()).normalize_or_zero();
            shots.push((*pos, direction, defender.id, target_id));
            defender.last_fire_tick = Some(current_tick);
        }
    }

    for (origin, direction, defender_id, target_id) in shots {
        world_setup::spawn_projectile(world, tuning, origin, direction);
        events.push(GameEvent::ProjectileFired {
            defender_id,
            target_id,
        });
    }
}
