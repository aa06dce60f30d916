//! Impact system — projectile overlap, damage, obstacle destruction.
//!
//! A projectile is spent on its first blocking-obstacle or opposing-tank
//! overlap. Destroying an obstacle removes it from the world and marks
//! the barrier grid dirty; the rebuild completes before the next path
//! query. Tank health is damaged but never removes the tank.

use hecs::{Entity, World};

use skirmish_core::components::{
    FiredBy, Health, HitBox, HunterTank, PlayerTank, Pose, Projectile,
};
use skirmish_core::enums::{ObstacleCategory, ObstacleKind, TankArchetype};
use skirmish_core::events::GameEvent;

use crate::physics::Aabb;

struct Shot {
    entity: Entity,
    aabb: Aabb,
    damage: f64,
    by: TankArchetype,
}

/// Run the impact system. Spent projectiles and destroyed obstacles are
/// collected into the despawn buffer and removed at the end of the pass.
pub fn run(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    barrier_dirty: &mut bool,
) {
    despawn_buffer.clear();

    let shots: Vec<Shot> = world
        .query::<(&Pose, &HitBox, &Projectile, &FiredBy)>()
        .iter()
        .map(|(entity, (pose, hit, projectile, fired_by))| Shot {
            entity,
            aabb: Aabb::from_hit_box(hit, pose.position),
            damage: projectile.damage,
            by: fired_by.0,
        })
        .collect();
    if shots.is_empty() {
        return;
    }

    let obstacles: Vec<(Entity, Aabb, ObstacleCategory)> = world
        .query::<(&Pose, &HitBox, &ObstacleCategory)>()
        .iter()
        .map(|(entity, (pose, hit, category))| {
            (entity, Aabb::from_hit_box(hit, pose.position), *category)
        })
        .collect();
    let tanks: Vec<(Entity, Aabb, TankArchetype)> = collect_tanks(world);

    let mut obstacle_damage: Vec<(Entity, f64)> = Vec::new();
    let mut tank_damage: Vec<(Entity, TankArchetype, f64)> = Vec::new();

    for shot in &shots {
        let mut spent = false;

        for (entity, aabb, category) in &obstacles {
            if !category.blocks() {
                continue;
            }
            if shot.aabb.overlaps(aabb) {
                obstacle_damage.push((*entity, shot.damage));
                spent = true;
                break;
            }
        }

        if !spent {
            for (entity, aabb, archetype) in &tanks {
                if *archetype == shot.by {
                    continue;
                }
                if shot.aabb.overlaps(aabb) {
                    tank_damage.push((*entity, *archetype, shot.damage));
                    spent = true;
                    break;
                }
            }
        }

        if spent {
            despawn_buffer.push(shot.entity);
        }
    }

    for (entity, damage) in obstacle_damage {
        apply_obstacle_damage(world, entity, damage, events, despawn_buffer, barrier_dirty);
    }

    for (entity, archetype, damage) in tank_damage {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.current = (health.current - damage).max(0.0);
            events.push(GameEvent::TankHit {
                target: archetype,
                remaining_health: health.current,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn apply_obstacle_damage(
    world: &mut World,
    entity: Entity,
    damage: f64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    barrier_dirty: &mut bool,
) {
    let position = world
        .get::<&Pose>(entity)
        .map(|pose| pose.position)
        .unwrap_or_default();

    let mut destroyed = false;
    if let Ok(mut kind) = world.get::<&mut ObstacleKind>(entity) {
        if let ObstacleKind::Destructible { health } = *kind {
            // Two hits landing the same tick both report; only the first
            // crossing of zero destroys.
            if health > 0 {
                let remaining = health - damage as i32;
                *kind = ObstacleKind::Destructible { health: remaining };
                events.push(GameEvent::ObstacleHit {
                    position,
                    remaining_health: remaining.max(0),
                });
                destroyed = remaining <= 0;
            }
        }
    }

    if destroyed {
        events.push(GameEvent::ObstacleDestroyed { position });
        despawn_buffer.push(entity);
        *barrier_dirty = true;
    }
}

fn collect_tanks(world: &World) -> Vec<(Entity, Aabb, TankArchetype)> {
    let mut tanks = Vec::new();
    for (entity, (_player, pose, hit)) in world.query::<(&PlayerTank, &Pose, &HitBox)>().iter() {
        tanks.push((
            entity,
            Aabb::from_hit_box(hit, pose.position),
            TankArchetype::Player,
        ));
    }
    for (entity, (_hunter, pose, hit)) in world.query::<(&HunterTank, &Pose, &HitBox)>().iter() {
        tanks.push((
            entity,
            Aabb::from_hit_box(hit, pose.position),
            TankArchetype::Hunter,
        ));
    }
    tanks
}
