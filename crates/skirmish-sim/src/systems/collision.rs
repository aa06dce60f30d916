//! Tank movement with collision resolution.
//!
//! Integrates each tank's velocity through the axis-separated
//! move-and-clamp resolver so tanks halt against blocking obstacles
//! instead of tunneling through them.

use hecs::World;

use skirmish_core::components::{HitBox, Mobility, Pose};
use skirmish_core::constants::DT;
use skirmish_core::enums::ObstacleCategory;
use skirmish_core::types::Velocity;

use crate::physics::{resolve_move, Aabb};

pub fn run(world: &mut World) {
    let blockers = blocking_aabbs(world);

    // Mobility distinguishes tanks: obstacles have no velocity and
    // projectiles have no mobility.
    for (_entity, (pose, vel, hit, _mobility)) in
        world.query_mut::<(&mut Pose, &Velocity, &HitBox, &Mobility)>()
    {
        pose.position = resolve_move(hit, pose.position, vel.x * DT, vel.y * DT, &blockers);
    }
}

/// Bounding boxes of every blocking obstacle.
pub fn blocking_aabbs(world: &World) -> Vec<Aabb> {
    world
        .query::<(&Pose, &HitBox, &ObstacleCategory)>()
        .iter()
        .filter(|(_, (_, _, category))| category.blocks())
        .map(|(_, (pose, hit, _))| Aabb::from_hit_box(hit, pose.position))
        .collect()
}
