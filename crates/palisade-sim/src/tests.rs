//! Tests for the simulation engine: phase transitions, economy, spawn
//! cadence, combat, leaks, and determinism.

use palisade_core::commands::PlayerCommand;
use palisade_core::components::{Adversary, Defender, Projectile};
use palisade_core::constants::TICK_RATE;
use palisade_core::enums::{EndCause, GamePhase};
use palisade_core::events::GameEvent;
use palisade_core::state::GameStateSnapshot;
use palisade_core::tuning::Tuning;
use palisade_core::types::{Position, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::systems;
use crate::wave::Tally;
use crate::world_setup;

fn engine_with(tuning: Tuning) -> SimulationEngine {
    SimulationEngine::new(SimConfig { tuning }).expect("valid test tuning")
}

/// Tick until the predicate holds, returning the matching snapshot.
fn run_until(
    engine: &mut SimulationEngine,
    max_ticks: usize,
    mut pred: impl FnMut(&GameStateSnapshot) -> bool,
) -> GameStateSnapshot {
    for _ in 0..max_ticks {
        let snap = engine.tick();
        if pred(&snap) {
            return snap;
        }
    }
    panic!("condition not reached within {max_ticks} ticks");
}

// ---- Phase transitions ----

#[test]
fn test_start_phase_ignores_ticks() {
    let mut engine = engine_with(Tuning::default());

    for _ in 0..10 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Start);
        assert_eq!(snap.time.tick, 0, "time must not advance before StartGame");
    }
}

#[test]
fn test_start_command_enters_placement() {
    let mut engine = engine_with(Tuning::default());
    engine.queue_command(PlayerCommand::StartGame);

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Placement);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.coins, 300);
    assert_eq!(snap.health, 100);

    let remaining = snap.placement_secs_remaining.expect("countdown visible");
    assert!(remaining > 29.0 && remaining < 30.0);

    // Countdown decreases tick by tick.
    let next = engine.tick().placement_secs_remaining.unwrap();
    assert!(next < remaining);
}

#[test]
fn test_placement_deadline_auto_advances() {
    let tuning = Tuning {
        placement_duration_secs: 0.1, // 6 ticks
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_command(PlayerCommand::StartGame);

    for _ in 0..5 {
        assert_eq!(engine.tick().phase, GamePhase::Placement);
    }
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::ActiveWave);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveStarted { wave: 1, spawn_target: 5 })));
}

#[test]
fn test_coin_exhaustion_auto_advances() {
    let mut engine = engine_with(Tuning::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();

    engine.queue_commands([
        PlayerCommand::PlaceDefender { x: 100.0, y: 100.0 },
        PlayerCommand::PlaceDefender { x: 200.0, y: 100.0 },
        PlayerCommand::PlaceDefender { x: 300.0, y: 100.0 },
    ]);
    let snap = engine.tick();

    assert_eq!(snap.defenders.len(), 3);
    assert_eq!(snap.coins, 0);
    // 0 coins < defender cost, so the wave begins without waiting out
    // the 30 second clock.
    assert_eq!(snap.phase, GamePhase::ActiveWave);
}

// ---- Economy ----

#[test]
fn test_fourth_placement_rejected() {
    let mut engine = engine_with(Tuning::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();

    engine.queue_commands([
        PlayerCommand::PlaceDefender { x: 100.0, y: 100.0 },
        PlayerCommand::PlaceDefender { x: 200.0, y: 100.0 },
        PlayerCommand::PlaceDefender { x: 300.0, y: 100.0 },
        PlayerCommand::PlaceDefender { x: 400.0, y: 100.0 },
    ]);
    let snap = engine.tick();

    // 300 coins at 100 each: exactly three placements succeed, the
    // fourth is a silent no-op.
    assert_eq!(snap.defenders.len(), 3);
    assert_eq!(snap.coins, 0);
    let placed = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::DefenderPlaced { .. }))
        .count();
    assert_eq!(placed, 3);
}

#[test]
fn test_out_of_phase_commands_ignored() {
    let mut engine = engine_with(Tuning::default());

    // Placement before StartGame does nothing.
    engine.queue_command(PlayerCommand::PlaceDefender { x: 100.0, y: 100.0 });
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Start);
    assert_eq!(snap.coins, 300);
    assert!(snap.defenders.is_empty());

    // A second StartGame during Placement does nothing.
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Placement);

    // Placement during an active wave does nothing.
    let tuning = Tuning {
        placement_duration_secs: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::ActiveWave);
    engine.queue_command(PlayerCommand::PlaceDefender { x: 100.0, y: 100.0 });
    let snap = engine.tick();
    assert!(snap.defenders.is_empty());
    assert_eq!(snap.coins, 300);
}

// ---- Spawn cadence ----

#[test]
fn test_wave_one_spawn_cadence() {
    let tuning = Tuning {
        placement_duration_secs: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_command(PlayerCommand::StartGame);

    let mut max_spawned = 0;
    for _ in 0..400 {
        let snap = engine.tick();
        if snap.time.elapsed_secs <= 1.0 {
            assert_eq!(
                snap.tally.spawned, 0,
                "no spawn before one full spawn interval"
            );
        }
        max_spawned = max_spawned.max(snap.tally.spawned);
    }

    // Wave 1 target is 5: all delivered after five intervals, never more.
    assert_eq!(max_spawned, 5);
    assert_eq!(engine.tally().spawned, 5);
}

// ---- Combat ----

/// 30 health at 10 damage per hit: dead after exactly three hits.
#[test]
fn test_three_hits_kill_adversary() {
    let tuning = Tuning {
        path: vec![Position::new(0.0, 0.0), Position::new(1000.0, 0.0)],
        adversary_base_speed: 0.0, // hold the target at the spawn point
        adversaries_per_wave: 1,
        placement_duration_secs: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_commands([
        PlayerCommand::StartGame,
        PlayerCommand::PlaceDefender { x: 0.0, y: 0.0 },
    ]);

    let mut fire_ticks: Vec<u64> = Vec::new();
    let mut kills = 0;
    let mut min_health_seen = f64::INFINITY;

    let snap = run_until(&mut engine, 400, |snap| {
        for event in &snap.events {
            match event {
                GameEvent::ProjectileFired { .. } => fire_ticks.push(snap.time.tick),
                GameEvent::AdversaryKilled { .. } => kills += 1,
                _ => {}
            }
        }
        for adversary in &snap.adversaries {
            min_health_seen = min_health_seen.min(adversary.health);
        }
        snap.phase == GamePhase::Placement && snap.wave == 2
    });

    assert_eq!(kills, 1);
    assert_eq!(fire_ticks.len(), 3, "exactly three hits, never more");
    assert_eq!(engine.tally().killed, 1);
    // A dying adversary is removed the same tick it crosses zero, so the
    // lowest health ever visible is one hit above zero.
    assert!((min_health_seen - 10.0).abs() < 1e-9);
    // Consecutive successful shots are never closer than the fire interval.
    for pair in fire_ticks.windows(2) {
        assert!(pair[1] - pair[0] >= TICK_RATE as u64);
    }
    // Wave cleared: reward paid (300 - 100 + 50) and speed ramped.
    assert_eq!(snap.coins, 250);
    assert!((engine.adversary_speed() - 6.0).abs() < 1e-9);
}

// ---- Leaks ----

#[test]
fn test_leak_fires_one_tick_after_path_end() {
    let tuning = Tuning {
        path: vec![Position::new(0.0, 0.0), Position::new(10.0, 0.0)],
        adversary_base_speed: 1200.0, // crosses the path in one tick
        adversaries_per_wave: 2,
        spawn_interval_secs: 0.0,
        placement_duration_secs: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(); // wave begins
    engine.tick(); // one interval must elapse before the first spawn

    // First adversary spawns and reaches the final waypoint this tick.
    let snap = engine.tick();
    assert_eq!(snap.adversaries.len(), 1);
    assert_eq!(snap.adversaries[0].position, Position::new(10.0, 0.0));
    assert_eq!(snap.health, 100, "no penalty on the arrival tick");
    assert_eq!(snap.tally.leaked, 0);

    // One tick later it has fully exited: penalty applied exactly once,
    // entity removed. The second adversary spawned this tick.
    let snap = engine.tick();
    assert_eq!(snap.health, 90);
    assert_eq!(snap.tally.leaked, 1);
    assert_eq!(snap.adversaries.len(), 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::AdversaryLeaked { id: 0, penalty: 10 })));

    // Second leak clears the wave (all spawned, none alive): health
    // resets to max and Placement begins again.
    let snap = engine.tick();
    assert_eq!(snap.tally.leaked, 2);
    assert_eq!(snap.phase, GamePhase::Placement);
    assert_eq!(snap.wave, 2);
    assert_eq!(snap.health, 100);
}

// ---- Session properties ----

#[test]
fn test_adversary_conservation() {
    let tuning = Tuning {
        placement_duration_secs: 0.0,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_commands([
        PlayerCommand::StartGame,
        PlayerCommand::PlaceDefender { x: 266.0, y: 300.0 },
    ]);

    for _ in 0..2000 {
        let snap = engine.tick();
        assert_eq!(
            snap.tally.spawned,
            snap.tally.killed + snap.tally.leaked + snap.adversaries.len() as u32,
            "every spawned adversary is live, killed, or leaked"
        );
        for adversary in &snap.adversaries {
            assert!(adversary.health > 0.0, "dead adversaries are removed");
        }
        if snap.phase == GamePhase::Placement {
            assert_eq!(snap.health, 100, "placement always starts at full health");
        }
        if snap.phase == GamePhase::Placement && snap.wave == 2 {
            break;
        }
    }

    assert_eq!(engine.tally().spawned, 5);
    assert_eq!(engine.wave(), 2);
}

#[test]
fn test_game_over_freezes_simulation() {
    let tuning = Tuning {
        path: vec![Position::new(0.0, 0.0), Position::new(10.0, 0.0)],
        adversary_base_speed: 1200.0,
        adversaries_per_wave: 5,
        spawn_interval_secs: 0.0,
        placement_duration_secs: 0.0,
        player_max_health: 10,
        ..Default::default()
    };
    let mut engine = engine_with(tuning);
    engine.queue_command(PlayerCommand::StartGame);

    let snap = run_until(&mut engine, 50, |snap| snap.phase == GamePhase::GameOver);
    assert_eq!(snap.end_cause, Some(EndCause::HealthDepleted));
    assert!(snap.health <= 0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { cause: EndCause::HealthDepleted, .. })));

    // The wave still had unspawned adversaries; none of them arrive.
    let spawned_at_end = snap.tally.spawned;
    assert!(spawned_at_end < 5);
    let frozen_tick = snap.time.tick;

    for _ in 0..50 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.time.tick, frozen_tick);
        assert_eq!(snap.tally.spawned, spawned_at_end);
        assert!(snap.events.is_empty());
    }
}

#[test]
fn test_quit_terminates_from_any_state() {
    // From Start.
    let mut engine = engine_with(Tuning::default());
    engine.queue_command(PlayerCommand::Quit);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.end_cause, Some(EndCause::PlayerQuit));

    // StartGame after quitting is ignored.
    engine.queue_command(PlayerCommand::StartGame);
    assert_eq!(engine.tick().phase, GamePhase::GameOver);

    // From Placement; a second Quit does not emit a second event.
    let mut engine = engine_with(Tuning::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine.queue_command(PlayerCommand::Quit);
    let snap = engine.tick();
    assert_eq!(snap.end_cause, Some(EndCause::PlayerQuit));
    engine.queue_command(PlayerCommand::Quit);
    assert!(engine.tick().events.is_empty());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_config_same_commands() {
    let tuning = Tuning {
        placement_duration_secs: 1.0,
        ..Default::default()
    };
    let mut engine_a = engine_with(tuning.clone());
    let mut engine_b = engine_with(tuning);

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_commands([
            PlayerCommand::StartGame,
            PlayerCommand::PlaceDefender { x: 266.0, y: 300.0 },
            PlayerCommand::PlaceDefender { x: 533.0, y: 250.0 },
        ]);
    }

    for _ in 0..1500 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with identical input");
    }
}

// ---- System-level behavior ----

#[test]
fn test_fire_control_prefers_nearest_adversary() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut events = Vec::new();

    world_setup::spawn_defender(&mut world, &tuning, 0, 0.0, 0.0);
    world.spawn((
        Adversary {
            id: 7,
            segment: 0,
            health: 30.0,
        },
        Position::new(100.0, 0.0),
    ));
    world.spawn((
        Adversary {
            id: 3,
            segment: 0,
            health: 30.0,
        },
        Position::new(50.0, 0.0),
    ));

    systems::fire_control::run(&mut world, &tuning, 0, &mut events);
    assert!(matches!(
        events.as_slice(),
        [GameEvent::ProjectileFired {
            defender_id: 0,
            target_id: 3,
        }]
    ));
}

#[test]
fn test_fire_control_breaks_ties_by_lowest_id() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut events = Vec::new();

    world_setup::spawn_defender(&mut world, &tuning, 0, 0.0, 0.0);
    world.spawn((
        Adversary {
            id: 9,
            segment: 0,
            health: 30.0,
        },
        Position::new(60.0, 0.0),
    ));
    world.spawn((
        Adversary {
            id: 4,
            segment: 0,
            health: 30.0,
        },
        Position::new(-60.0, 0.0),
    ));

    systems::fire_control::run(&mut world, &tuning, 0, &mut events);
    assert!(matches!(
        events.as_slice(),
        [GameEvent::ProjectileFired { target_id: 4, .. }]
    ));
}

#[test]
fn test_fire_control_misses_do_not_consume_cooldown() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut events = Vec::new();

    world_setup::spawn_defender(&mut world, &tuning, 0, 0.0, 0.0);
    let adversary = world.spawn((
        Adversary {
            id: 0,
            segment: 0,
            health: 30.0,
        },
        Position::new(1000.0, 0.0),
    ));

    // Out of range: no shot, no cooldown stamp.
    systems::fire_control::run(&mut world, &tuning, 0, &mut events);
    assert!(events.is_empty());
    {
        let mut query = world.query::<&Defender>();
        let (_, defender) = query.iter().next().unwrap();
        assert_eq!(defender.last_fire_tick, None);
    }

    // One tick later the adversary is in range: an unfired defender
    // shoots immediately instead of waiting out a phantom cooldown.
    world.get::<&mut Position>(adversary).unwrap().x = 100.0;
    systems::fire_control::run(&mut world, &tuning, 1, &mut events);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_intercept_consumes_projectile_and_kills_at_zero() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut tally = Tally::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();

    world.spawn((
        Adversary {
            id: 0,
            segment: 0,
            health: 30.0,
        },
        Position::new(0.0, 0.0),
    ));
    for _ in 0..2 {
        world.spawn((
            Projectile { damage: 10.0 },
            Position::new(5.0, 0.0),
            Velocity::new(0.0, 0.0),
        ));
    }

    systems::intercept::run(&mut world, &tuning, &mut tally, &mut events, &mut buffer);

    // Both projectiles hit and are consumed; the adversary survives on
    // 10 health.
    assert_eq!(world.query::<&Projectile>().iter().count(), 0);
    assert_eq!(tally.killed, 0);
    {
        let mut query = world.query::<&Adversary>();
        let (_, adversary) = query.iter().next().unwrap();
        assert!((adversary.health - 10.0).abs() < 1e-9);
    }

    // The lethal hit removes the adversary the same tick.
    world.spawn((
        Projectile { damage: 10.0 },
        Position::new(0.0, 5.0),
        Velocity::new(0.0, 0.0),
    ));
    systems::intercept::run(&mut world, &tuning, &mut tally, &mut events, &mut buffer);
    assert_eq!(tally.killed, 1);
    assert_eq!(world.query::<&Adversary>().iter().count(), 0);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::AdversaryKilled { id: 0 })));
}

#[test]
fn test_intercept_dead_adversary_absorbs_no_further_hits() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut tally = Tally::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();

    world.spawn((
        Adversary {
            id: 0,
            segment: 0,
            health: 10.0,
        },
        Position::new(0.0, 0.0),
    ));
    for _ in 0..2 {
        world.spawn((
            Projectile { damage: 10.0 },
            Position::new(0.0, 0.0),
            Velocity::new(0.0, 0.0),
        ));
    }

    systems::intercept::run(&mut world, &tuning, &mut tally, &mut events, &mut buffer);

    // The first projectile kills; the second finds no live target and
    // stays in flight.
    assert_eq!(tally.killed, 1);
    assert_eq!(world.query::<&Projectile>().iter().count(), 1);
}

#[test]
fn test_projectile_motion_and_oob_cleanup() {
    let tuning = Tuning::default();
    let mut world = hecs::World::new();
    let mut buffer = Vec::new();

    let inside = world.spawn((
        Projectile { damage: 10.0 },
        Position::new(400.0, 300.0),
        Velocity::new(240.0, 0.0),
    ));
    world.spawn((
        Projectile { damage: 10.0 },
        Position::new(2000.0, 300.0),
        Velocity::new(240.0, 0.0),
    ));

    for _ in 0..TICK_RATE {
        systems::movement::run(&mut world);
    }
    // One second of flight at 240 px/s.
    assert!((world.get::<&Position>(inside).unwrap().x - 640.0).abs() < 1e-9);

    systems::cleanup::run(&mut world, &tuning, &mut buffer);
    assert_eq!(world.query::<&Projectile>().iter().count(), 1);
    assert!(world.contains(inside));
}
