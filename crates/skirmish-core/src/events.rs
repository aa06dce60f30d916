//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TankArchetype;
use crate::types::Position;

/// Simulation events collected during a tick and delivered in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tank fired a projectile.
    ShotFired { by: TankArchetype },
    /// A destructible obstacle took damage.
    ObstacleHit {
        position: Position,
        remaining_health: i32,
    },
    /// A destructible obstacle was destroyed and removed from the world.
    ObstacleDestroyed { position: Position },
    /// A tank took projectile damage.
    TankHit {
        target: TankArchetype,
        remaining_health: f64,
    },
}
