//! Wave bookkeeping — spawn progress for the active wave and the
//! session-lifetime adversary tally.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use palisade_core::state::TallyView;

/// Spawn progress for the wave currently running.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Total adversaries this wave will spawn.
    pub spawn_target: u32,
    /// Adversaries spawned so far.
    pub spawned: u32,
    /// Tick of the most recent spawn (or of wave start before the first).
    pub last_spawn_tick: u64,
}

impl WaveState {
    /// Spawn target for wave N = N × per-wave unit.
    pub fn for_wave(wave: u32, adversaries_per_wave: u32, current_tick: u64) -> Self {
        Self {
            spawn_target: wave * adversaries_per_wave,
            spawned: 0,
            last_spawn_tick: current_tick,
        }
    }

    pub fn all_spawned(&self) -> bool {
        self.spawned >= self.spawn_target
    }
}

/// Session-lifetime adversary accounting.
///
/// `spawned` always equals `killed + leaked + live adversaries`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tally {
    pub spawned: u32,
    pub killed: u32,
    pub leaked: u32,
}

impl Tally {
    pub fn view(&self) -> TallyView {
        TallyView {
            spawned: self.spawned,
            killed: self.killed,
            leaked: self.leaked,
        }
    }
}
