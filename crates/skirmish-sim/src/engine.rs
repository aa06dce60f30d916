//! Game engine — the core of the simulation.
//!
//! `GameEngine` owns the hecs ECS world and the barrier grid, consumes one
//! input snapshot per tick, runs all systems in a fixed order, and
//! produces `ArenaSnapshot`s. Completely headless, enabling deterministic
//! testing: the same seed and input sequence replay the same game.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{HitBox, Pose};
use skirmish_core::constants::GRID_CELL_SIZE;
use skirmish_core::enums::ObstacleCategory;
use skirmish_core::events::GameEvent;
use skirmish_core::input::InputState;
use skirmish_core::state::ArenaSnapshot;
use skirmish_core::types::{Position, SimTime};

use skirmish_nav::{BarrierGrid, FieldBounds};

use crate::level::LevelLayout;
use crate::systems;
use crate::systems::pursuit::PursuitState;
use crate::world_setup;

/// Configuration for starting a new game.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same hunter spawn.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game engine. Owns the ECS world and all simulation state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    bounds: FieldBounds,
    barrier: BarrierGrid,
    barrier_dirty: bool,
    pursuit: PursuitState,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl GameEngine {
    /// Create a new engine with the given config and level.
    pub fn new(config: SimConfig, layout: &LevelLayout) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_arena(&mut world, &mut rng, layout);

        let barrier = BarrierGrid::new(GRID_CELL_SIZE, layout.bounds);
        let mut engine = Self {
            world,
            time: SimTime::default(),
            bounds: layout.bounds,
            barrier,
            barrier_dirty: true,
            pursuit: PursuitState::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        };
        engine.rebuild_barrier();
        engine
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> ArenaSnapshot {
        // 1. Player intent
        systems::player::run(&mut self.world, input);
        // 2. Pursuit AI (barrier rebuild first if the world changed)
        if self.barrier_dirty {
            self.rebuild_barrier();
        }
        systems::pursuit::run(&mut self.world, &self.barrier, &mut self.pursuit);
        // 3. Weapons (player trigger, hunter cadence)
        systems::weapons::run(&mut self.world, input, self.pursuit.active, &mut self.events);
        // 4. Projectile integration
        systems::movement::run(&mut self.world);
        // 5. Tank movement with collision clamp
        systems::collision::run(&mut self.world);
        // 6. Projectile impacts, damage, obstacle destruction
        systems::impact::run(
            &mut self.world,
            &mut self.events,
            &mut self.despawn_buffer,
            &mut self.barrier_dirty,
        );
        // 7. Out-of-bounds projectile cleanup
        systems::cleanup::run(&mut self.world, &self.bounds, &mut self.despawn_buffer);

        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.pursuit, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the barrier grid.
    pub fn barrier(&self) -> &BarrierGrid {
        &self.barrier
    }

    /// Whether the hunter pursued on the last tick.
    pub fn pursuit_active(&self) -> bool {
        self.pursuit.active
    }

    /// Re-rasterize every blocking obstacle into the barrier grid.
    /// Runs before the next path query whenever obstacle geometry changed.
    fn rebuild_barrier(&mut self) {
        let mut query = self
            .world
            .query::<(&Pose, &HitBox, &ObstacleCategory)>();
        let polygons: Vec<Vec<Position>> = query
            .iter()
            .filter(|(_, (_, _, category))| category.blocks())
            .map(|(_, (pose, hit, _))| hit.world_points(pose.position))
            .collect();
        drop(query);

        self.barrier.rebuild(&polygons);
        self.barrier_dirty = false;
    }
}
