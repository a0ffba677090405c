//! Frame driver.
//!
//! `Simulation` owns the registry and all session state, runs the systems
//! in a fixed order once per display refresh, and produces a
//! `RenderSnapshot`. Completely headless, so sessions are reproducible in
//! tests from a seed and a scripted input sequence.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::config::Tunables;
use starfall_core::game::{GameState, InputState};
use starfall_core::state::RenderSnapshot;
use starfall_core::types::PlayArea;

use crate::ecs::{EntityId, Registry};
use crate::entities;
use crate::systems;
use crate::systems::spawner::SpawnTimer;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for spawn placement. Same seed = same session.
    pub seed: u64,
    pub play_area: PlayArea,
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            play_area: PlayArea::default(),
            tunables: Tunables::default(),
        }
    }
}

/// The simulation. Sole writer of the registry for the whole frame.
pub struct Simulation {
    registry: Registry,
    state: GameState,
    input: InputState,
    spawn_timer: SpawnTimer,
    rng: ChaCha8Rng,
    tunables: Tunables,
    play_area: PlayArea,
    /// Timestamp of the previous frame; `None` until the first frame.
    last_frame_ms: Option<f64>,
    player: Option<EntityId>,
}

impl Simulation {
    /// Create a session with one player at the center of the play area.
    pub fn new(config: SimConfig) -> Self {
        let mut sim = Self {
            registry: Registry::new(),
            state: GameState::new(),
            input: InputState::new(),
            spawn_timer: SpawnTimer::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tunables: config.tunables,
            play_area: config.play_area,
            last_frame_ms: None,
            player: None,
        };
        sim.spawn_player();
        sim
    }

    /// Advance one display refresh. `timestamp_ms` must not decrease
    /// between calls; the first call (and the first after a restart)
    /// advances by zero.
    pub fn frame(&mut self, timestamp_ms: f64) -> RenderSnapshot {
        let delta_ms = self
            .last_frame_ms
            .map_or(0.0, |last| (timestamp_ms - last).max(0.0));
        self.last_frame_ms = Some(timestamp_ms);
        self.state.elapsed_ms += delta_ms;

        if !self.state.game_over {
            self.run_systems(timestamp_ms, delta_ms);
        }

        systems::snapshot::build_snapshot(&self.registry, &self.state)
    }

    /// Tear the session down and start over with a fresh player.
    pub fn restart(&mut self) {
        self.registry.clear();
        self.state.reset();
        self.input.reset_transient();
        self.spawn_timer.reset();
        self.last_frame_ms = None;
        self.spawn_player();
        log::debug!("session restarted");
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Direct registry access for hosts that stage entities.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Where the host writes key and pointer events.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn play_area(&self) -> PlayArea {
        self.play_area
    }

    /// The player created by the last `new`/`restart`, if it still exists.
    pub fn player(&self) -> Option<EntityId> {
        self.player.filter(|&id| self.registry.is_alive(id))
    }

    pub fn spawn_timer(&self) -> SpawnTimer {
        self.spawn_timer
    }

    fn spawn_player(&mut self) {
        let center = self.play_area.center();
        self.player = Some(entities::spawn_player(
            &mut self.registry,
            &self.tunables,
            center,
        ));
    }

    /// Run all systems in order. Each sees every effect of the ones
    /// before it in this frame and none of the ones after it.
    fn run_systems(&mut self, now_ms: f64, delta_ms: f64) {
        systems::player::face_pointer(&mut self.registry, &self.input);
        // 1. Input -> player velocity
        systems::input::run(&mut self.registry, &self.input, &self.tunables);
        // 2. Shooting
        systems::shooting::run(&mut self.registry, &mut self.input, &self.tunables, now_ms);
        // 3. Enemy AI steering
        systems::enemy_ai::run(&mut self.registry, &self.tunables);
        // 4. Movement integration
        systems::movement::run(&mut self.registry, delta_ms);
        // 5. Collision resolution
        let collisions =
            systems::collision::run(&mut self.registry, &mut self.state, &self.tunables);
        if collisions.enemies_killed > 0 || collisions.player_hits > 0 {
            log::debug!(
                "t={:.0}ms: {} hits, {} kills, {} rams",
                self.state.elapsed_ms,
                collisions.bullet_hits,
                collisions.enemies_killed,
                collisions.player_hits
            );
        }
        // 6. Lifespan expiry
        let expired = systems::lifespan::run(&mut self.registry, delta_ms);
        if !expired.is_empty() {
            log::trace!("{} entities expired", expired.len());
        }
        // 7. Cosmetic timers
        systems::fade::run(&mut self.registry, delta_ms);
        // 8. Spawning
        systems::spawner::run(
            &mut self.registry,
            &mut self.spawn_timer,
            &self.state,
            &mut self.rng,
            &self.tunables,
            &self.play_area,
            delta_ms,
        );
        systems::player::clamp_to_area(&mut self.registry, &self.play_area, &self.tunables);
    }
}
