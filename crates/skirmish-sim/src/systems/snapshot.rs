//! Snapshot system: queries the ECS world and builds a complete ArenaSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skirmish_core::components::{Health, HitBox, HunterTank, PlayerTank, Pose, Projectile, Turret};
use skirmish_core::enums::{ObstacleCategory, ObstacleKind, TankArchetype};
use skirmish_core::events::GameEvent;
use skirmish_core::state::{ArenaSnapshot, ObstacleView, ProjectileView, TankView};
use skirmish_core::types::SimTime;

use super::pursuit::PursuitState;

/// Build a complete ArenaSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    pursuit: &PursuitState,
    events: Vec<GameEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        tanks: build_tanks(world),
        projectiles: build_projectiles(world),
        obstacles: build_obstacles(world),
        pursuit_active: pursuit.active,
        pursuit_path: pursuit.path.clone(),
        events,
    }
}

/// Build tank views, player first for a stable ordering.
fn build_tanks(world: &World) -> Vec<TankView> {
    let mut tanks = Vec::with_capacity(2);
    for (_entity, (_player, pose, turret, health)) in
        world.query::<(&PlayerTank, &Pose, &Turret, &Health)>().iter()
    {
        tanks.push(TankView {
            archetype: TankArchetype::Player,
            position: pose.position,
            heading: pose.heading,
            turret_angle: turret.angle,
            health: health.current,
        });
    }
    for (_entity, (_hunter, pose, turret, health)) in
        world.query::<(&HunterTank, &Pose, &Turret, &Health)>().iter()
    {
        tanks.push(TankView {
            archetype: TankArchetype::Hunter,
            position: pose.position,
            heading: pose.heading,
            turret_angle: turret.angle,
            health: health.current,
        });
    }
    tanks
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Pose, &Projectile)>()
        .iter()
        .map(|(_, (pose, _))| ProjectileView {
            position: pose.position,
            heading: pose.heading,
        })
        .collect()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<ObstacleView> = world
        .query::<(&Pose, &HitBox, &ObstacleKind, &ObstacleCategory)>()
        .iter()
        .map(|(_, (pose, hit, kind, category))| ObstacleView {
            category: *category,
            polygon: hit.world_points(pose.position),
            health: match kind {
                ObstacleKind::Destructible { health } => Some(*health),
                ObstacleKind::Indestructible => None,
            },
        })
        .collect();

    // Stable order for renderers and serialized snapshots.
    obstacles.sort_by(|a, b| {
        let ka = a.polygon.first().map(|p| (p.x, p.y)).unwrap_or((0.0, 0.0));
        let kb = b.polygon.first().map(|p| (p.x, p.y)).unwrap_or((0.0, 0.0));
        ka.0.total_cmp(&kb.0).then(ka.1.total_cmp(&kb.1))
    });
    obstacles
}
