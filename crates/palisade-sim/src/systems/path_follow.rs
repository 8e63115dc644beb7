//! Adversary path traversal and leak resolution.
//!
//! Each adversary advances toward its next waypoint by `speed * DT`.
//! An adversary that was already terminal before its update (no next
//! waypoint) and is still terminal after it has fully exited the path:
//! the leak penalty is applied once and the entity is removed. The
//! two-snapshot check means a leak fires exactly one tick after the
//! adversary reaches the final waypoint.

use hecs::World;

use palisade_core::components::Adversary;
use palisade_core::constants::DT;
use palisade_core::events::GameEvent;
use palisade_core::path::{advance_toward, Path};
use palisade_core::types::Position;

use crate::wave::Tally;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    path: &Path,
    speed: f64,
    leak_penalty: i32,
    health: &mut i32,
    tally: &mut Tally,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    despawn_buffer.clear();

    let step = speed * DT;

    for (entity, (adversary, pos)) in world.query_mut::<(&mut Adversary, &mut Position)>() {
        let terminal_before = !path.has_next(adversary.segment);

        if !terminal_before {
            if let Ok(target) = path.point_at(adversary.segment + 1) {
                let (next, reached) = advance_toward(*pos, target, step);
                *pos = next;
                if reached {
                    adversary.segment += 1;
                }
            }
        }

        if terminal_before && !path.has_next(adversary.segment) {
            *health -= leak_penalty;
            tally.leaked += 1;
            events.push(GameEvent::AdversaryLeaked {
                id: adversary.id,
                penalty: leak_penalty,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
