//! Wave spawning system — feeds adversaries onto the path at a fixed
//! cadence until the wave's spawn target is met.

use hecs::World;

use palisade_core::events::GameEvent;
use palisade_core::path::Path;
use palisade_core::tuning::Tuning;

use crate::wave::{Tally, WaveState};
use crate::world_setup;

/// Spawn at most one adversary per tick, when the spawn interval has
/// elapsed and the wave still has adversaries to deliver.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    tuning: &Tuning,
    path: &Path,
    wave_state: &mut WaveState,
    next_adversary_id: &mut u32,
    tally: &mut Tally,
    events: &mut Vec<GameEvent>,
    current_tick: u64,
) {
    if wave_state.all_spawned() {
        return;
    }
    if current_tick.saturating_sub(wave_state.last_spawn_tick) < tuning.spawn_interval_ticks() {
        return;
    }

    let id = *next_adversary_id;
    *next_adversary_id += 1;
    world_setup::spawn_adversary(world, tuning, path, id);

    wave_state.spawned += 1;
    wave_state.last_spawn_tick = current_tick;
    tally.spawned += 1;
    events.push(GameEvent::AdversarySpawned { id });
}
