//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the ship, the boss and the
//! director state. It consumes one `InputFrame` per tick, runs all systems,
//! and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use galaxian_boss::Boss;
use galaxian_core::collaborators::{SessionOutcome, SessionSummary};
use galaxian_core::commands::InputFrame;
use galaxian_core::config::{GameConfig, ShipAttributes};
use galaxian_core::enums::GamePhase;
use galaxian_core::error::{ConfigResult, SimError};
use galaxian_core::events::AudioCue;
use galaxian_core::state::GameStateSnapshot;
use galaxian_core::types::SimTime;

use crate::ship::Ship;
use crate::systems;
use crate::systems::powerups::PowerUpSpawner;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::wave_director::{LevelAdvance, WaveState};
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same session.
    pub seed: u64,
    pub game: GameConfig,
    /// Attributes of the selected ship hull.
    pub ship: ShipAttributes,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
            ship: ShipAttributes::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    config: GameConfig,
    world: World,
    ship: Ship,
    boss: Option<Boss>,
    wave: WaveState,
    powerups: PowerUpSpawner,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    despawn_buffer: Vec<hecs::Entity>,
    audio_cues: Vec<AudioCue>,
}

impl SimulationEngine {
    /// Validate the configuration and set up level 1.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        config.game.validate()?;

        let SimConfig { seed, game, ship } = config;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut world = World::new();
        let units = world_setup::spawn_formation(&mut world, &game.formation, &game.playfield);
        let powerups = PowerUpSpawner::new(&game.powerups, &mut rng);
        tracing::info!(seed, units, "session started");

        Ok(Self {
            ship: Ship::new(&ship, &game.ship, &game.playfield),
            wave: WaveState::new(&game.formation),
            config: game,
            world,
            boss: None,
            powerups,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            despawn_buffer: Vec::new(),
            audio_cues: Vec::new(),
        })
    }

    /// Apply one tick of input, advance the simulation if it is running,
    /// and return the resulting snapshot.
    ///
    /// Paused sessions only honor pause-toggle and exit. Finished sessions
    /// ignore input entirely.
    pub fn tick(&mut self, input: &InputFrame) -> Result<GameStateSnapshot, SimError> {
        if !self.phase.is_finished() {
            self.handle_input(input);

            if self.phase == GamePhase::Active {
                self.run_systems(input)?;
                self.time.advance();

                if self.ship.lives == 0 {
                    self.phase = GamePhase::GameOver;
                    tracing::info!(
                        score = self.ship.score,
                        level = self.wave.level,
                        secs = self.time.elapsed_secs(),
                        "game over"
                    );
                }
            }
        }

        Ok(self.snapshot())
    }

    /// Build a snapshot of the current state, draining pending audio cues.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let audio_cues = std::mem::take(&mut self.audio_cues);
        systems::snapshot::build_snapshot(
            SnapshotInputs {
                world: &self.world,
                ship: &self.ship,
                boss: self.boss.as_ref(),
                wave: &self.wave,
                time: self.time,
                phase: self.phase,
            },
            audio_cues,
        )
    }

    /// Final result of a finished session.
    pub fn summary(&self) -> Result<SessionSummary, SimError> {
        let outcome = match self.phase {
            GamePhase::GameOver => SessionOutcome::GameOver,
            GamePhase::Exited => SessionOutcome::Exited,
            phase @ (GamePhase::Active | GamePhase::Paused) => {
                return Err(SimError::SessionNotFinished { phase });
            }
        };
        Ok(SessionSummary {
            score: self.ship.score,
            currency: self.ship.currency,
            level: self.wave.level,
            ticks: self.time.tick,
            outcome,
        })
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn level(&self) -> u32 {
        self.wave.level
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn powerup_spawner(&self) -> &PowerUpSpawner {
        &self.powerups
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    #[cfg(test)]
    pub fn boss_mut(&mut self) -> Option<&mut Boss> {
        self.boss.as_mut()
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mark every enemy unit dead (for tests that need a cleared wave).
    #[cfg(test)]
    pub fn kill_all_units(&mut self) {
        for (_entity, unit) in self
            .world
            .query_mut::<&mut galaxian_core::components::EnemyUnit>()
        {
            unit.alive = false;
        }
    }

    /// Pause toggle and exit. Exit wins over a simultaneous toggle.
    fn handle_input(&mut self, input: &InputFrame) {
        if input.exit {
            self.phase = GamePhase::Exited;
            tracing::info!(
                score = self.ship.score,
                level = self.wave.level,
                secs = self.time.elapsed_secs(),
                "session exited"
            );
            return;
        }
        if input.pause_toggle {
            self.phase = match self.phase {
                GamePhase::Active => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Active,
                finished => finished,
            };
            tracing::debug!(phase = ?self.phase, "pause toggled");
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputFrame) -> Result<(), SimError> {
        let config = &self.config;
        let playfield = &config.playfield;

        // 1. Ship: movement, firing, cooldown/projectiles/power-up timers
        self.ship
            .move_by(input.horizontal() * config.ship.input_step, playfield);
        if input.fire && self.ship.fire() {
            self.audio_cues.push(AudioCue::ShotFired);
        }
        self.ship.tick(playfield);

        // 2. Formation movement, unit projectiles, attack scheduling
        if self.boss.is_none() {
            systems::formation::run(&mut self.world, &mut self.wave, &config.enemy, playfield);
            systems::attack::advance_projectiles(&mut self.world, playfield);
            systems::attack::run(
                &mut self.world,
                &mut self.wave,
                &config.enemy,
                &mut self.rng,
                &mut self.audio_cues,
            );
        }

        // 3. Boss movement, firing, projectile flight
        let ship_position = self.ship.position;
        if let Some(boss) = self.boss.as_mut() {
            if boss.tick(ship_position, playfield) {
                self.audio_cues.push(AudioCue::ShotFired);
            }
            systems::projectiles::run(&mut boss.projectiles, ship_position, &config.homing, playfield);
        }

        // 4. Collisions
        let report = systems::collision::run(
            &mut self.world,
            &mut self.ship,
            self.boss.as_mut(),
            &config.enemy,
            &config.boss,
            &mut self.audio_cues,
        );
        systems::powerups::spawn_from_kills(
            &mut self.world,
            &mut self.powerups,
            &report.kills,
            &config.powerups,
            &mut self.rng,
        );
        if report.boss_destroyed {
            if let Some(boss) = self.boss.take() {
                tracing::info!(boss = boss.name(), level = self.wave.level, "boss destroyed");
            }
        }

        // 5. Pickups
        systems::powerups::run(
            &mut self.world,
            &mut self.ship,
            &config.powerups,
            &mut self.despawn_buffer,
        );

        // 6. Cleanup
        systems::cleanup::run(&mut self.world, playfield, &mut self.despawn_buffer);

        // 7. Wave clear → next level
        if self.boss.is_none() && systems::wave_director::living_units(&self.world) == 0 {
            let advance = systems::wave_director::advance_level(
                &mut self.world,
                &mut self.wave,
                &mut self.powerups,
                config,
                &mut self.rng,
                &mut self.despawn_buffer,
            )?;
            if let LevelAdvance::Boss(boss) = advance {
                self.boss = Some(boss);
            }
        }

        Ok(())
    }
}
