//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tank archetype: which side an agent fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankArchetype {
    /// Player-controlled tank, driven by per-tick input snapshots.
    Player,
    /// AI-controlled tank that pursues the player.
    Hunter,
}

/// Obstacle category supplied by the level loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleCategory {
    /// Level border wall. Indestructible, blocks movement and shots.
    Boundary,
    /// Destructible crate. Blocks movement and shots until destroyed.
    Crate,
    /// Decorative terrain. Never blocks anything.
    Terrain,
}

impl ObstacleCategory {
    /// Whether this category blocks movement, projectiles, and pathing.
    pub fn blocks(&self) -> bool {
        !matches!(self, ObstacleCategory::Terrain)
    }
}

/// Destructibility of an obstacle, resolved at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Cannot be damaged or removed.
    Indestructible,
    /// Carries health; removed from the world when health reaches zero.
    Destructible { health: i32 },
}
