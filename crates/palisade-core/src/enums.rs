//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// Transitions: Start → Placement → ActiveWave → Placement (loop) or
/// GameOver (terminal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the begin command.
    #[default]
    Start,
    /// Player may spend coins on defenders until the deadline elapses
    /// or coins run short.
    Placement,
    /// The per-tick simulation pipeline is running.
    ActiveWave,
    /// Terminal. No further simulation commands are accepted.
    GameOver,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player health reached zero mid-wave.
    HealthDepleted,
    /// The player quit.
    PlayerQuit,
}
