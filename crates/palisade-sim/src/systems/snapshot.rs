//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use palisade_core::components::{Adversary, Defender, Projectile};
use palisade_core::enums::{EndCause, GamePhase};
use palisade_core::events::GameEvent;
use palisade_core::state::*;
use palisade_core::types::{Position, SimTime, Velocity};

use crate::wave::Tally;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    coins: u32,
    health: i32,
    placement_secs_remaining: Option<f64>,
    tally: &Tally,
    end_cause: Option<EndCause>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave,
        coins,
        health,
        placement_secs_remaining,
        defenders: build_defenders(world, time.tick),
        adversaries: build_adversaries(world),
        projectiles: build_projectiles(world),
        tally: tally.view(),
        end_cause,
        events,
    }
}

fn build_defenders(world: &World, current_tick: u64) -> Vec<DefenderView> {
    let mut defenders: Vec<DefenderView> = world
        .query::<(&Defender, &Position)>()
        .iter()
        .map(|(_, (defender, pos))| DefenderView {
            id: defender.id,
            position: *pos,
            range: defender.range,
            ready: defender.last_fire_tick.is_none_or(|last| {
                current_tick.saturating_sub(last) >= defender.fire_interval_ticks
            }),
        })
        .collect();

    defenders.sort_by_key(|d| d.id);
    defenders
}

fn build_adversaries(world: &World) -> Vec<AdversaryView> {
    let mut adversaries: Vec<AdversaryView> = world
        .query::<(&Adversary, &Position)>()
        .iter()
        .map(|(_, (adversary, pos))| AdversaryView {
            id: adversary.id,
            position: *pos,
            health: adversary.health,
            segment: adversary.segment,
        })
        .collect();

    adversaries.sort_by_key(|a| a.id);
    adversaries
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, pos, vel))| ProjectileView {
            position: *pos,
            velocity: *vel,
        })
        .collect();

    projectiles.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });
    projectiles
}
