//! Game state snapshot — the complete visible state sent to the shell
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EndCause, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current wave number (starts at 1).
    pub wave: u32,
    pub coins: u32,
    pub health: i32,
    /// Seconds left to place defenders. Only present during Placement.
    pub placement_secs_remaining: Option<f64>,
    pub defenders: Vec<DefenderView>,
    pub adversaries: Vec<AdversaryView>,
    pub projectiles: Vec<ProjectileView>,
    pub tally: TallyView,
    /// Why the session ended. Only present in GameOver.
    pub end_cause: Option<EndCause>,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// A placed defender for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub id: u32,
    pub position: Position,
    pub range: f64,
    /// Whether the cooldown has elapsed.
    pub ready: bool,
}

/// A live adversary for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryView {
    pub id: u32,
    pub position: Position,
    pub health: f64,
    pub segment: usize,
}

/// A projectile in flight for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
}

/// Session-lifetime adversary accounting.
///
/// Invariant: `spawned == killed + leaked + live adversaries` on every
/// tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TallyView {
    pub spawned: u32,
    pub killed: u32,
    pub leaked: u32,
}
