//! Entity spawn factories for setting up the arena world.
//!
//! Creates the player tank, the hunter tank, obstacles, and projectiles
//! with appropriate component bundles.

use std::f64::consts::{FRAC_PI_2, TAU};

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::{ObstacleCategory, ObstacleKind, TankArchetype};
use skirmish_core::types::{muzzle_bearing, Position, Velocity};

use skirmish_pursuit::profiles::get_profile;

use crate::level::{LevelLayout, ObstacleSpec};

/// Set up the initial arena world: both tanks and every obstacle.
/// The hunter spawn marker is chosen by the seeded RNG.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, layout: &LevelLayout) {
    spawn_tank(world, TankArchetype::Player, layout.player_spawn);

    if !layout.hunter_spawns.is_empty() {
        let index = rng.gen_range(0..layout.hunter_spawns.len());
        spawn_tank(world, TankArchetype::Hunter, layout.hunter_spawns[index]);
    }

    for spec in &layout.obstacles {
        spawn_obstacle(world, spec);
    }
}

/// Spawn a tank of the given archetype. Both start facing north with the
/// turret at rest.
pub fn spawn_tank(world: &mut World, archetype: TankArchetype, position: Position) -> hecs::Entity {
    let profile = get_profile(archetype);

    let pose = Pose {
        position,
        heading: FRAC_PI_2,
    };
    let mobility = Mobility {
        movement_speed: profile.movement_speed,
        rotation_speed: profile.rotation_speed,
    };
    let health = Health {
        current: profile.max_health,
        max: profile.max_health,
    };
    let weapon = Weapon {
        fire_rate: profile.fire_rate,
        // Start one full period charged so the first trigger pull fires.
        cooldown: 1.0 / profile.fire_rate,
        projectile: ProjectileSpec {
            speed: profile.projectile_speed,
            damage: profile.projectile_damage,
            hit_box: HitBox::rect(PROJECTILE_HALF_LENGTH, PROJECTILE_HALF_WIDTH),
        },
    };
    let hit_box = HitBox::square(TANK_HITBOX_HALF);

    match archetype {
        TankArchetype::Player => world.spawn((
            PlayerTank,
            pose,
            Velocity::default(),
            Turret::default(),
            mobility,
            health,
            weapon,
            hit_box,
        )),
        TankArchetype::Hunter => world.spawn((
            HunterTank,
            pose,
            Velocity::default(),
            Turret::default(),
            mobility,
            health,
            weapon,
            hit_box,
        )),
    }
}

/// Spawn an obstacle from its authored polygon. The pose sits at the
/// polygon centroid with the hit box stored as offsets from it; crates
/// get destructible health, everything else is indestructible.
pub fn spawn_obstacle(world: &mut World, spec: &ObstacleSpec) -> hecs::Entity {
    let centroid = polygon_centroid(&spec.polygon);
    let points = spec
        .polygon
        .iter()
        .map(|p| Position::new(p.x - centroid.x, p.y - centroid.y))
        .collect();

    let kind = match spec.category {
        ObstacleCategory::Crate => ObstacleKind::Destructible {
            health: CRATE_HEALTH,
        },
        ObstacleCategory::Boundary | ObstacleCategory::Terrain => ObstacleKind::Indestructible,
    };

    world.spawn((
        Pose {
            position: centroid,
            heading: 0.0,
        },
        HitBox { points },
        kind,
        spec.category,
    ))
}

/// Spawn a projectile from a tank's turret: offset forward to the muzzle,
/// heading and velocity along the turret bearing.
pub fn spawn_projectile(
    world: &mut World,
    from: Position,
    turret_angle: f64,
    spec: &ProjectileSpec,
    by: TankArchetype,
) -> hecs::Entity {
    let bearing = muzzle_bearing(turret_angle);
    let position = Position::new(
        from.x + MUZZLE_OFFSET * bearing.cos(),
        from.y + MUZZLE_OFFSET * bearing.sin(),
    );

    world.spawn((
        Projectile { damage: spec.damage },
        FiredBy(by),
        Pose {
            position,
            heading: bearing.rem_euclid(TAU),
        },
        Velocity::new(spec.speed * bearing.cos(), spec.speed * bearing.sin()),
        spec.hit_box.clone(),
    ))
}

fn polygon_centroid(polygon: &[Position]) -> Position {
    if polygon.is_empty() {
        return Position::default();
    }
    let n = polygon.len() as f64;
    let sum = polygon.iter().fold((0.0, 0.0), |(sx, sy), p| {
        (sx + p.x, sy + p.y)
    });
    Position::new(sum.0 / n, sum.1 / n)
}
