//! Events emitted by the simulation for shell feedback.
//!
//! Drained into each tick's snapshot; the shell decides what to do with
//! them (sound, toasts, nothing).

use serde::{Deserialize, Serialize};

use crate::enums::EndCause;

/// One observable simulation occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave began; `spawn_target` adversaries will be spawned.
    WaveStarted { wave: u32, spawn_target: u32 },
    /// A new adversary entered the path.
    AdversarySpawned { id: u32 },
    /// A defender was bought and placed.
    DefenderPlaced { id: u32, x: f64, y: f64 },
    /// A defender fired at an adversary.
    ProjectileFired { defender_id: u32, target_id: u32 },
    /// An adversary was destroyed by a projectile.
    AdversaryKilled { id: u32 },
    /// An adversary exited the path; the penalty was applied.
    AdversaryLeaked { id: u32, penalty: i32 },
    /// All adversaries of the wave were resolved with health remaining.
    WaveCleared { wave: u32, reward: u32 },
    /// Terminal transition.
    GameOver { cause: EndCause, wave: u32 },
}
