//! Archetype-specific tank parameters.
//!
//! Consolidates the tuning values used when spawning each tank kind.

use skirmish_core::constants::*;
use skirmish_core::enums::TankArchetype;

/// Parameter set for a tank archetype.
pub struct TankProfile {
    /// Translation speed (world units per second).
    pub movement_speed: f64,
    /// Chassis rotation speed (radians per second).
    pub rotation_speed: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Projectile flight speed (world units per second).
    pub projectile_speed: f64,
    /// Projectile damage per hit.
    pub projectile_damage: f64,
    /// Starting and maximum health.
    pub max_health: f64,
}

/// Get the parameter profile for a given archetype.
pub fn get_profile(archetype: TankArchetype) -> TankProfile {
    match archetype {
        TankArchetype::Player => TankProfile {
            movement_speed: TANK_MOVEMENT_SPEED,
            rotation_speed: TANK_ROTATION_SPEED,
            fire_rate: PLAYER_FIRE_RATE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            max_health: TANK_MAX_HEALTH,
        },
        TankArchetype::Hunter => TankProfile {
            movement_speed: HUNTER_MOVEMENT_SPEED,
            rotation_speed: TANK_ROTATION_SPEED,
            fire_rate: HUNTER_FIRE_RATE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            max_health: TANK_MAX_HEALTH,
        },
    }
}
