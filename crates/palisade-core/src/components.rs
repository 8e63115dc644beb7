//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// A stationary defender. Position is a separate component and is fixed
/// after placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defender {
    /// Placement order, unique per session.
    pub id: u32,
    /// Engagement range (pixels).
    pub range: f64,
    /// Minimum ticks between successful shots.
    pub fire_interval_ticks: u64,
    /// Tick of the last successful shot. None until the first shot,
    /// so a fresh defender may fire at the first opportunity.
    pub last_fire_tick: Option<u64>,
}

/// A mobile adversary traversing the shared path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversary {
    /// Spawn order, unique per session. Breaks targeting ties.
    pub id: u32,
    /// Index of the waypoint most recently reached (monotonically
    /// non-decreasing).
    pub segment: usize,
    /// Remaining health. The entity is destroyed the tick this drops
    /// to zero or below.
    pub health: f64,
}

/// A projectile in flight. Velocity is fixed at launch; projectiles do
/// not home.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Damage applied to the first adversary hit.
    pub damage: f64,
}
