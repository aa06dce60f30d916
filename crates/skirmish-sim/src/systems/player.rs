//! Player intent system — applies the per-tick input snapshot.
//!
//! Left/right rotate the chassis; up/down drive it along its heading.
//! The turret independently tracks the cursor.

use std::f64::consts::TAU;

use hecs::World;

use skirmish_core::components::{Mobility, PlayerTank, Pose, Turret};
use skirmish_core::constants::DT;
use skirmish_core::input::InputState;
use skirmish_core::types::Velocity;

/// Resolve player input into chassis rotation, velocity, and turret aim.
pub fn run(world: &mut World, input: &InputState) {
    for (_entity, (_player, pose, vel, turret, mobility)) in
        world.query_mut::<(&PlayerTank, &mut Pose, &mut Velocity, &mut Turret, &Mobility)>()
    {
        if input.left && !input.right {
            pose.heading = (pose.heading + mobility.rotation_speed * DT).rem_euclid(TAU);
        } else if input.right && !input.left {
            pose.heading = (pose.heading - mobility.rotation_speed * DT).rem_euclid(TAU);
        }

        let drive = if input.up && !input.down {
            1.0
        } else if input.down && !input.up {
            -1.0
        } else {
            0.0
        };
        *vel = Velocity::new(
            drive * mobility.movement_speed * pose.heading.cos(),
            drive * mobility.movement_speed * pose.heading.sin(),
        );

        // Cursor under the tank leaves the turret where it was.
        if let Some(aim) = pose.position.turret_aim_to(&input.cursor) {
            turret.angle = aim;
        }
    }
}
