//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no rendering dependency), enabling deterministic testing.
//!
//! Time is a fixed logical timestep: every `tick()` in Placement or
//! ActiveWave advances the clock by exactly one tick, however often the
//! shell chooses to render. `Start` and `GameOver` ticks are no-ops.

use std::collections::VecDeque;

use hecs::World;

use palisade_core::commands::PlayerCommand;
use palisade_core::components::Adversary;
use palisade_core::constants::DT;
use palisade_core::enums::{EndCause, GamePhase};
use palisade_core::events::GameEvent;
use palisade_core::path::{Path, PathError};
use palisade_core::state::GameStateSnapshot;
use palisade_core::tuning::Tuning;
use palisade_core::types::SimTime;

use crate::systems;
use crate::wave::{Tally, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Gameplay tuning; `Tuning::default()` reproduces the classic
    /// session.
    pub tuning: Tuning,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    path: Path,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_defender_id: u32,
    next_adversary_id: u32,

    // --- Session progression ---
    wave: u32,
    coins: u32,
    health: i32,
    /// Current adversary speed (px/s). Shared by all current and future
    /// adversaries; ramps up after each cleared wave.
    adversary_speed: f64,
    /// Tick at which the Placement phase auto-advances.
    placement_deadline: u64,
    wave_state: WaveState,
    tally: Tally,
    end_cause: Option<EndCause>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// Fails if the configured path has fewer than two waypoints.
    pub fn new(config: SimConfig) -> Result<Self, PathError> {
        let path = Path::new(config.tuning.path.clone())?;
        let coins = config.tuning.starting_coins;
        let health = config.tuning.player_max_health;
        let adversary_speed = config.tuning.adversary_base_speed;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            tuning: config.tuning,
            path,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_defender_id: 0,
            next_adversary_id: 0,
            wave: 1,
            coins,
            health,
            adversary_speed,
            placement_deadline: 0,
            wave_state: WaveState::default(),
            tally: Tally::default(),
            end_cause: None,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Placement => {
                self.time.advance();
                // Auto-advance so a player who cannot afford another
                // defender is not stuck waiting out the clock.
                if self.time.tick >= self.placement_deadline
                    || self.coins < self.tuning.defender_cost
                {
                    self.begin_wave();
                }
            }
            GamePhase::ActiveWave => {
                self.run_systems();
                self.time.advance();
                self.resolve_outcome();
            }
            GamePhase::Start | GamePhase::GameOver => {}
        }

        let events = std::mem::take(&mut self.events);
        let placement_secs_remaining = (self.phase == GamePhase::Placement)
            .then(|| self.placement_deadline.saturating_sub(self.time.tick) as f64 * DT);

        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.wave,
            self.coins,
            self.health,
            placement_secs_remaining,
            &self.tally,
            self.end_cause,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current wave number.
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Get the current coin balance.
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Get the current player health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Why the session ended, if it has.
    pub fn end_cause(&self) -> Option<EndCause> {
        self.end_cause
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the session adversary tally.
    #[cfg(test)]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Get the current adversary speed (px/s).
    #[cfg(test)]
    pub fn adversary_speed(&self) -> f64 {
        self.adversary_speed
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands invalid for the current
    /// phase are ignored without any state change.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Start {
                    self.enter_placement();
                }
            }
            PlayerCommand::PlaceDefender { x, y } => {
                if self.phase == GamePhase::Placement && self.coins >= self.tuning.defender_cost {
                    self.coins -= self.tuning.defender_cost;
                    let id = self.next_defender_id;
                    self.next_defender_id += 1;
                    world_setup::spawn_defender(&mut self.world, &self.tuning, id, x, y);
                    self.events.push(GameEvent::DefenderPlaced { id, x, y });
                }
            }
            PlayerCommand::Quit => {
                if self.phase != GamePhase::GameOver {
                    self.end(EndCause::PlayerQuit);
                }
            }
        }
    }

    /// Run all systems in order. The order is observable behavior:
    /// a defender must not fire at an adversary that leaked this tick.
    fn run_systems(&mut self) {
        let current_tick = self.time.tick;
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &self.tuning,
            &self.path,
            &mut self.wave_state,
            &mut self.next_adversary_id,
            &mut self.tally,
            &mut self.events,
            current_tick,
        );
        // 2. Adversary traversal + leak resolution
        systems::path_follow::run(
            &mut self.world,
            &self.path,
            self.adversary_speed,
            self.tuning.leak_health_penalty,
            &mut self.health,
            &mut self.tally,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 3. Defender fire control
        systems::fire_control::run(&mut self.world, &self.tuning, current_tick, &mut self.events);
        // 4. Projectile kinematics
        systems::movement::run(&mut self.world);
        // 5. Collision resolution
        systems::intercept::run(
            &mut self.world,
            &self.tuning,
            &mut self.tally,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Out-of-bounds projectile cleanup
        systems::cleanup::run(&mut self.world, &self.tuning, &mut self.despawn_buffer);
    }

    /// Post-pipeline checks: loss first, then wave completion.
    fn resolve_outcome(&mut self) {
        if self.health <= 0 {
            self.end(EndCause::HealthDepleted);
            return;
        }

        if self.wave_state.all_spawned() && self.adversary_count() == 0 {
            let reward = self.tuning.wave_coin_reward;
            self.coins += reward;
            self.adversary_speed += self.tuning.speed_ramp_increment;
            self.events.push(GameEvent::WaveCleared {
                wave: self.wave,
                reward,
            });
            self.wave += 1;
            self.health = self.tuning.player_max_health;
            systems::cleanup::clear_projectiles(&mut self.world, &mut self.despawn_buffer);
            self.enter_placement();
        }
    }

    fn adversary_count(&self) -> usize {
        let mut query = self.world.query::<&Adversary>();
        query.iter().count()
    }

    fn enter_placement(&mut self) {
        self.phase = GamePhase::Placement;
        self.placement_deadline = self.time.tick + self.tuning.placement_ticks();
    }

    fn begin_wave(&mut self) {
        self.wave_state = WaveState::for_wave(
            self.wave,
            self.tuning.adversaries_per_wave,
            self.time.tick,
        );
        self.phase = GamePhase::ActiveWave;
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave,
            spawn_target: self.wave_state.spawn_target,
        });
    }

    fn end(&mut self, cause: EndCause) {
        self.phase = GamePhase::GameOver;
        self.end_cause = Some(cause);
        self.events.push(GameEvent::GameOver {
            cause,
            wave: self.wave,
        });
    }
}
