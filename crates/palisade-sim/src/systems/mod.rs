//! Simulation systems, run in a fixed order each active-wave tick.
//!
//! The order is part of the observable behavior and must not change:
//! spawn → adversary movement/leaks → defender fire → projectile
//! movement → collisions → out-of-bounds cleanup.

pub mod cleanup;
pub mod fire_control;
pub mod intercept;
pub mod movement;
pub mod path_follow;
pub mod snapshot;
pub mod wave_spawner;
