//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Barrier grid / pursuit ---

/// Edge length of one barrier grid cell (world units).
pub const GRID_CELL_SIZE: f64 = 64.0;

/// Range from the target within which the hunter plans and steers.
/// Beyond it the hunter holds position and does not fire.
pub const PURSUIT_ACTIVATION_RANGE: f64 = 1000.0;

// --- Tank kinematics ---

/// Player tank movement speed (world units per second).
pub const TANK_MOVEMENT_SPEED: f64 = 50.0;

/// Hunter tank movement speed (world units per second).
pub const HUNTER_MOVEMENT_SPEED: f64 = 45.0;

/// Chassis rotation speed (radians per second, 150 degrees).
pub const TANK_ROTATION_SPEED: f64 = 150.0 * std::f64::consts::PI / 180.0;

/// Half extent of the square tank hit box (world units).
pub const TANK_HITBOX_HALF: f64 = 50.0;

/// Starting and maximum tank health.
pub const TANK_MAX_HEALTH: f64 = 100.0;

// --- Weapons ---

/// Player fire rate (shots per second).
pub const PLAYER_FIRE_RATE: f64 = 2.0;

/// Hunter fire rate (shots per second).
pub const HUNTER_FIRE_RATE: f64 = 1.0;

/// Projectile speed (world units per second).
pub const PROJECTILE_SPEED: f64 = 600.0;

/// Projectile damage per hit.
pub const PROJECTILE_DAMAGE: f64 = 10.0;

/// Distance from the tank center to the muzzle along the turret bearing;
/// projectiles spawn here, clear of the firing tank's own hit box.
pub const MUZZLE_OFFSET: f64 = 60.0;

/// Projectile hit box half length (along the flight direction).
pub const PROJECTILE_HALF_LENGTH: f64 = 7.0;

/// Projectile hit box half width.
pub const PROJECTILE_HALF_WIDTH: f64 = 6.0;

// --- Obstacles ---

/// Starting health of a destructible crate (three hits at default damage).
pub const CRATE_HEALTH: i32 = 30;
