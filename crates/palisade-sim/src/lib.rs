//! Simulation engine for PALISADE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the shell.

pub mod engine;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use palisade_core as core;

#[cfg(test)]
mod tests;
