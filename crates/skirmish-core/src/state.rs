//! Arena snapshot — the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ObstacleCategory, TankArchetype};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete arena state built after each tick. The renderer consumes this
/// and returns nothing to the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub tanks: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    /// Whether the hunter is actively pursuing this tick.
    pub pursuit_active: bool,
    /// The hunter's current path waypoints (debug overlay).
    pub pursuit_path: Vec<Position>,
    pub events: Vec<GameEvent>,
}

/// One tank as drawn: chassis pose, turret angle, health bar value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub archetype: TankArchetype,
    pub position: Position,
    pub heading: f64,
    pub turret_angle: f64,
    pub health: f64,
}

/// One projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub heading: f64,
}

/// One obstacle with its world-space outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub category: ObstacleCategory,
    pub polygon: Vec<Position>,
    /// Remaining health for destructible obstacles, None otherwise.
    pub health: Option<i32>,
}
