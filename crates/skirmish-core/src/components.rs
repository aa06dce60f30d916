//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TankArchetype;
use crate::types::Position;

/// The single authoritative pose of an agent. Turret and chassis render
/// parts read this each frame; they never hold their own position copies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    /// Chassis heading (standard math angle, 0 = East, CCW), wrapped to [0, TAU).
    pub heading: f64,
}

/// Turret state, independent of the chassis heading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Turret {
    /// Sprite-frame aim angle (see [`crate::types::Position::turret_aim_to`]).
    pub angle: f64,
}

/// Movement capabilities of a tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Translation speed (world units per second).
    pub movement_speed: f64,
    /// Chassis rotation speed (radians per second).
    pub rotation_speed: f64,
}

/// Agent health. Tracked and damaged, but reaching zero never removes
/// the agent from the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Template for the projectiles a weapon fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileSpec {
    /// Flight speed (world units per second).
    pub speed: f64,
    /// Damage applied per hit.
    pub damage: f64,
    /// Hit shape, vertices relative to the projectile position.
    pub hit_box: HitBox,
}

/// Weapon state: cadence accumulator plus the projectile template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Shots per second.
    pub fire_rate: f64,
    /// Time accumulated toward the next shot (seconds). Exceeding
    /// `1 / fire_rate` makes a shot due; the overflow is preserved.
    pub cooldown: f64,
    pub projectile: ProjectileSpec,
}

/// Closed hit polygon, vertices relative to the owning entity's position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitBox {
    pub points: Vec<Position>,
}

impl HitBox {
    /// Axis-aligned square of the given half extent, centered on the owner.
    pub fn square(half: f64) -> Self {
        Self::rect(half, half)
    }

    /// Axis-aligned rectangle with the given half extents.
    pub fn rect(half_x: f64, half_y: f64) -> Self {
        Self {
            points: vec![
                Position::new(-half_x, -half_y),
                Position::new(half_x, -half_y),
                Position::new(half_x, half_y),
                Position::new(-half_x, half_y),
            ],
        }
    }

    /// Vertices translated to world space for an owner at `center`.
    pub fn world_points(&self, center: Position) -> Vec<Position> {
        self.points
            .iter()
            .map(|p| Position::new(center.x + p.x, center.y + p.y))
            .collect()
    }
}

/// Live projectile state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
}

/// Which side fired a projectile; its shots never damage that side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiredBy(pub TankArchetype);

/// Marks an entity as the player's tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTank;

/// Marks an entity as the AI hunter tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HunterTank;
