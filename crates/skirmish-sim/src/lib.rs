//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs systems in a fixed order once per tick,
//! and produces ArenaSnapshots for the renderer. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod level;
pub mod physics;
pub mod systems;
pub mod world_setup;

pub use skirmish_core as core;
pub use engine::{GameEngine, SimConfig};
