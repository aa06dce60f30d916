//! Cleanup system: removes projectiles that leave the field bounds.
//!
//! Off-level projectiles would otherwise fly forever; bounds exit is
//! their lifetime cap. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use skirmish_core::components::{Pose, Projectile};
use skirmish_nav::FieldBounds;

pub fn run(world: &mut World, bounds: &FieldBounds, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pose, _projectile)) in world.query_mut::<(&Pose, &Projectile)>() {
        let p = pose.position;
        if p.x < bounds.left || p.x > bounds.right || p.y < bounds.bottom || p.y > bounds.top {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
