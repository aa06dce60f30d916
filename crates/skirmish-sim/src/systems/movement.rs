//! Kinematic integration for projectiles.
//!
//! Projectiles fly unclamped: position += velocity * dt. Tank motion goes
//! through the collision resolver instead (see the collision system).

use hecs::World;

use skirmish_core::components::{Pose, Projectile};
use skirmish_core::constants::DT;
use skirmish_core::types::Velocity;

pub fn run(world: &mut World) {
    for (_entity, (pose, vel, _projectile)) in
        world.query_mut::<(&mut Pose, &Velocity, &Projectile)>()
    {
        pose.position.x += vel.x * DT;
        pose.position.y += vel.y * DT;
    }
}
