//! Polyline path utilities.
//!
//! Adversaries traverse a fixed, shared polyline from its first waypoint
//! to its last. The path never changes after construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Position;

/// Errors from path construction and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("a path requires at least two waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("waypoint index {index} out of range for a path of {len} points")]
    OutOfRange { index: usize, len: usize },
}

/// An immutable, ordered sequence of 2D waypoints.
///
/// Construction guarantees at least two waypoints. Consecutive duplicate
/// waypoints are tolerated: a zero-length segment is skipped in a single
/// tick because its remaining distance is never greater than a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    pub fn new(waypoints: Vec<Position>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }
        Ok(Self { waypoints })
    }

    /// Waypoint at `index`, or `OutOfRange` past the end.
    pub fn point_at(&self, index: usize) -> Result<Position, PathError> {
        self.waypoints
            .get(index)
            .copied()
            .ok_or(PathError::OutOfRange {
                index,
                len: self.waypoints.len(),
            })
    }

    /// The spawn point shared by all adversaries.
    pub fn first(&self) -> Position {
        // Invariant from `new`: at least two waypoints exist.
        self.waypoints[0]
    }

    /// Whether a next waypoint exists after `segment`.
    pub fn has_next(&self, segment: usize) -> bool {
        segment + 1 < self.waypoints.len()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    /// Total polyline length in pixels.
    pub fn total_length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].range_to(&w[1]))
            .sum()
    }
}

/// Move `position` by at most `max_step` toward `target`.
///
/// Returns the new position and a reached flag, true iff the remaining
/// distance was within `max_step` (the returned position is then exactly
/// `target`). The degenerate position == target case reports reached
/// without moving, so no direction is ever computed from a zero vector.
pub fn advance_toward(position: Position, target: Position, max_step: f64) -> (Position, bool) {
    let delta: DVec2 = target.to_dvec2() - position.to_dvec2();
    let distance = delta.length();
    if distance <= max_step {
        return (target, true);
    }
    let next = position.to_dvec2() + delta / distance * max_step;
    (Position::from_dvec2(next), false)
}
