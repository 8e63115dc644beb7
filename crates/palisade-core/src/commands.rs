//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that is invalid for the current phase is ignored without mutating any
//! state; the shell is expected to only offer valid commands, but the core
//! does not rely on it.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin the session. Valid only in the Start phase.
    StartGame,
    /// Place a defender at (x, y). Valid only during Placement; rejected
    /// silently when coins are insufficient.
    PlaceDefender { x: f64, y: f64 },
    /// Terminate the session from any state.
    Quit,
}
